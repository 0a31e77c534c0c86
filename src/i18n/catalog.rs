// SPDX-License-Identifier: PMPL-1.0-or-later

//! Development-language string table.
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add it to `resources/Base.lproj/Localizable.strings` and each
//!    localized table (missing keys fall back to the key itself)

use std::collections::HashMap;

const EN: &[(&str, &str)] = &[
    // Inspection action descriptions
    ("current.locale", "Current locale"),
    ("autoupdate.locale", "Auto-updating locale"),
    ("current.calendar", "Current calendar"),
    ("autoupdate.calendar", "Auto-updating calendar"),
    ("preferred.languages", "Preferred languages"),
    ("bundle.preferred.localizations", "Preferred localizations of the main bundle"),
    // Console
    ("console", "Console"),
    ("console.empty", "(no entries)"),
    ("console.cleared", "Console cleared"),
];

/// Owned copy of the development table, as loaded into the main bundle.
pub fn development_strings() -> HashMap<String, String> {
    EN.iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
