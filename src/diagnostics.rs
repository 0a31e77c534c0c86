// SPDX-License-Identifier: PMPL-1.0-or-later

//! `doctor` checks for the bundle layout and the locale environment.

use crate::bundle::BundleResolver;
use crate::i18n;
use crate::provider::LocaleProvider;
use crate::types::BASE_LANGUAGE;
use anyhow::{anyhow, Result};
use colored::*;
use std::env;

const LOCALE_ENV: &[&str] = &["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG", "TZ"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: String,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail);
    }
}

/// Collect every check without printing.
pub fn collect(resolver: &BundleResolver, provider: &dyn LocaleProvider) -> Vec<Diagnostic> {
    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("locale-in-detail {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.extend(check_bundle_root(resolver));

    for key in LOCALE_ENV {
        checks.push(check_env(key));
    }

    let locale = provider.current_locale();
    let name = i18n::language_name(&locale).unwrap_or("unknown language");
    checks.push(Diagnostic::ok("host locale", format!("{} ({})", locale, name)));
    checks.push(Diagnostic::ok(
        "preferred languages",
        provider.preferred_languages().join(", "),
    ));
    checks
}

/// Print all checks; errors only when a check failed.
pub fn run(resolver: &BundleResolver, provider: &dyn LocaleProvider) -> Result<()> {
    println!("locale-in-detail diagnostics");
    println!();

    let checks = collect(resolver, provider);
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("diagnostics reported issues"))
    } else {
        Ok(())
    }
}

fn check_bundle_root(resolver: &BundleResolver) -> Vec<Diagnostic> {
    let root = resolver.root();
    if !root.is_dir() {
        return vec![Diagnostic::error(
            "bundle root",
            format!("{} missing (set --bundle-root)", root.display()),
        )];
    }

    let localizations = resolver.localizations();
    let mut checks = vec![Diagnostic::ok(
        "bundle root",
        format!("{} exists", root.display()),
    )];

    if localizations.iter().any(|code| code == BASE_LANGUAGE) {
        checks.push(Diagnostic::ok(
            "base localization",
            "Base.lproj present".to_string(),
        ));
    } else {
        checks.push(Diagnostic::warning(
            "base localization",
            "Base.lproj missing or empty (unmatched codes use the main bundle)".to_string(),
        ));
    }

    let described: Vec<String> = localizations
        .iter()
        .filter(|code| code.as_str() != BASE_LANGUAGE)
        .map(|code| match i18n::language_name(code) {
            Some(name) => format!("{} ({})", code, name),
            None => code.clone(),
        })
        .collect();
    if described.is_empty() {
        checks.push(Diagnostic::warning(
            "localizations",
            "none found".to_string(),
        ));
    } else {
        checks.push(Diagnostic::ok("localizations", described.join(", ")));
    }

    checks
}

fn check_env(key: &str) -> Diagnostic {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Diagnostic::ok(format!("${}", key), value),
        _ => Diagnostic::warning(format!("${}", key), "not set".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CalendarInfo;
    use std::fs;
    use tempfile::TempDir;

    struct Stub;

    impl LocaleProvider for Stub {
        fn current_locale(&self) -> String {
            "de_DE".to_string()
        }
        fn auto_updating_locale(&self) -> String {
            self.current_locale()
        }
        fn current_calendar(&self) -> CalendarInfo {
            CalendarInfo {
                identifier: "gregorian".to_string(),
                locale: "de_DE".to_string(),
                time_zone: "Europe/Berlin".to_string(),
                first_weekday: 2,
                auto_updating: false,
            }
        }
        fn auto_updating_calendar(&self) -> CalendarInfo {
            self.current_calendar()
        }
        fn preferred_languages(&self) -> Vec<String> {
            vec!["de-DE".to_string()]
        }
        fn preferred_localizations(&self) -> Vec<String> {
            vec!["en".to_string()]
        }
    }

    fn find<'a>(checks: &'a [Diagnostic], label: &str) -> &'a Diagnostic {
        checks
            .iter()
            .find(|d| d.label == label)
            .unwrap_or_else(|| panic!("no {label} check"))
    }

    #[test]
    fn missing_root_is_an_error() {
        let resolver = BundleResolver::new("/nonexistent/resources");
        assert!(run(&resolver, &Stub).is_err());
    }

    #[test]
    fn populated_root_passes() {
        let dir = TempDir::new().unwrap();
        for code in ["Base", "ja"] {
            let lproj = dir.path().join(format!("{code}.lproj"));
            fs::create_dir_all(&lproj).unwrap();
            fs::write(lproj.join("Localizable.strings"), "").unwrap();
        }
        let resolver = BundleResolver::new(dir.path());
        let checks = collect(&resolver, &Stub);

        assert_eq!(find(&checks, "base localization").level, Level::Ok);
        assert_eq!(find(&checks, "localizations").detail, "ja (Japanese)");
        assert_eq!(find(&checks, "host locale").detail, "de_DE (German)");
        assert!(run(&resolver, &Stub).is_ok());
    }

    #[test]
    fn missing_base_is_a_warning() {
        let dir = TempDir::new().unwrap();
        let checks = collect(&BundleResolver::new(dir.path()), &Stub);
        assert_eq!(find(&checks, "base localization").level, Level::Warn);
        assert_eq!(find(&checks, "localizations").level, Level::Warn);
        assert!(checks.iter().all(|d| d.level != Level::Error));
    }
}
