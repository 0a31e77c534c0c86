// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host locale queries.
//!
//! [`LocaleProvider`] is the seam between the inspector and the host. The
//! system implementation reads the OS locale through `sys-locale`, the time
//! zone from `TZ` or the local UTC offset, and the main bundle's
//! localizations from disk. Tests substitute their own implementation.

use crate::bundle::BundleResolver;
use crate::i18n;
use crate::types::CalendarInfo;
use chrono::Local;
use std::env;

pub const FALLBACK_LOCALE: &str = "en_US";
pub const FALLBACK_LANGUAGE: &str = "en";
pub const GREGORIAN: &str = "gregorian";

/// Regions whose week starts on Sunday.
const SUNDAY_FIRST_REGIONS: &[&str] = &[
    "US", "CA", "JP", "BR", "IL", "KR", "MX", "PH", "TW", "ZA", "SA",
];

pub trait LocaleProvider {
    /// Locale identifier captured when the provider was created.
    fn current_locale(&self) -> String;
    /// Locale identifier reflecting the host setting at call time.
    fn auto_updating_locale(&self) -> String;
    fn current_calendar(&self) -> CalendarInfo;
    fn auto_updating_calendar(&self) -> CalendarInfo;
    /// User's languages, most preferred first.
    fn preferred_languages(&self) -> Vec<String>;
    /// Main bundle localizations, ordered by preference.
    fn preferred_localizations(&self) -> Vec<String>;
}

/// Provider backed by the running host.
#[derive(Debug, Clone)]
pub struct SystemLocaleProvider {
    locale: String,
    calendar: CalendarInfo,
    resolver: BundleResolver,
}

impl SystemLocaleProvider {
    pub fn new(resolver: BundleResolver) -> Self {
        let locale = host_locale();
        let calendar = calendar_for(&locale, false);
        Self {
            locale,
            calendar,
            resolver,
        }
    }
}

impl LocaleProvider for SystemLocaleProvider {
    fn current_locale(&self) -> String {
        self.locale.clone()
    }

    fn auto_updating_locale(&self) -> String {
        host_locale()
    }

    fn current_calendar(&self) -> CalendarInfo {
        self.calendar.clone()
    }

    fn auto_updating_calendar(&self) -> CalendarInfo {
        calendar_for(&host_locale(), true)
    }

    fn preferred_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for tag in sys_locale::get_locales() {
            let tag = strip_encoding(&tag).replace('_', "-");
            if !tag.is_empty() && !languages.contains(&tag) {
                languages.push(tag);
            }
        }
        if languages.is_empty() {
            languages.push(FALLBACK_LANGUAGE.to_string());
        }
        languages
    }

    fn preferred_localizations(&self) -> Vec<String> {
        self.resolver
            .preferred_localizations(&self.preferred_languages())
    }
}

fn host_locale() -> String {
    sys_locale::get_locale()
        .map(|tag| normalize_identifier(&tag))
        .filter(|id| !id.is_empty() && id != "C" && id != "POSIX")
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// `en-US`, `en_US.UTF-8` and `en_US@euro` all become `en_US`.
pub fn normalize_identifier(tag: &str) -> String {
    strip_encoding(tag).replace('-', "_")
}

fn strip_encoding(tag: &str) -> &str {
    tag.split(['.', '@']).next().unwrap_or(tag).trim()
}

/// Region subtag of a locale identifier, if any.
pub fn region_of(identifier: &str) -> Option<&str> {
    identifier
        .split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase()))
}

/// 1 (Sunday) or 2 (Monday).
pub fn first_weekday(identifier: &str) -> u8 {
    match region_of(identifier) {
        Some(region) if SUNDAY_FIRST_REGIONS.contains(&region) => 1,
        // Language-only identifiers follow the development locale.
        None if i18n::primary_subtag(identifier) == FALLBACK_LANGUAGE => 1,
        _ => 2,
    }
}

fn host_time_zone() -> String {
    match env::var("TZ") {
        Ok(tz) if !tz.trim().is_empty() => tz.trim().trim_start_matches(':').to_string(),
        _ => format!("GMT{}", Local::now().format("%:z")),
    }
}

fn calendar_for(locale: &str, auto_updating: bool) -> CalendarInfo {
    CalendarInfo {
        identifier: GREGORIAN.to_string(),
        locale: locale.to_string(),
        time_zone: host_time_zone(),
        first_weekday: first_weekday(locale),
        auto_updating,
    }
}
