// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for locale-in-detail

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language or localization identifier such as `"ja"`, `"en-GB"` or
/// `"Base"`. Not validated against any fixed set.
pub type LanguageCode = String;

/// Literal code substituted when no language code is given.
pub const BASE_LANGUAGE: &str = "Base";

/// Localization used when nothing in the bundle matches the user's
/// preferences.
pub const DEVELOPMENT_LOCALIZATION: &str = "en";

/// Display color for an inspection action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

// System palette (light appearance)
pub const BLUE: RgbColor = RgbColor::new(0, 122, 255);
pub const GREEN: RgbColor = RgbColor::new(52, 199, 89);
pub const INDIGO: RgbColor = RgbColor::new(88, 86, 214);
pub const MINT: RgbColor = RgbColor::new(0, 199, 190);
pub const ORANGE: RgbColor = RgbColor::new(255, 149, 0);
pub const PURPLE: RgbColor = RgbColor::new(175, 82, 222);

/// Snapshot of a calendar as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInfo {
    /// Calendar system, e.g. `gregorian`.
    pub identifier: String,
    /// Locale identifier the calendar was built for.
    pub locale: String,
    /// Time zone name, or a UTC offset when no name is known.
    pub time_zone: String,
    /// 1 = Sunday, 2 = Monday.
    pub first_weekday: u8,
    /// Whether this calendar tracks host setting changes.
    pub auto_updating: bool,
}

impl fmt::Display for CalendarInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flavour = if self.auto_updating {
            "autoupdatingCurrent"
        } else {
            "current"
        };
        write!(
            f,
            "{} ({}) locale: {}, time zone: {}, first weekday: {}",
            self.identifier, flavour, self.locale, self.time_zone, self.first_weekday
        )
    }
}
