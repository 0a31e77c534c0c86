// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog of inspection actions.
//!
//! Each action stands for one host query. The catalog maps every action to
//! a label (the API it mirrors), a localization key for its description and
//! a display color. The mapping is a plain `match`, so it is total and
//! fixed at compile time.

use crate::types::{RgbColor, BLUE, GREEN, INDIGO, MINT, ORANGE, PURPLE};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionAction {
    CurrentLocale,
    AutoUpdatingLocale,
    CurrentCalendar,
    AutoUpdatingCalendar,
    PreferredLanguages,
    PreferredLocalizations,
}

/// Display attributes of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub label: &'static str,
    pub localization_key: &'static str,
    pub color: RgbColor,
}

/// Describe an action. Never fails.
pub fn describe(action: InspectionAction) -> ActionInfo {
    use InspectionAction::*;

    let (label, localization_key, color) = match action {
        CurrentLocale => ("Locale.current", "current.locale", BLUE),
        AutoUpdatingLocale => ("Locale.autoUpdatingCurrent", "autoupdate.locale", GREEN),
        CurrentCalendar => ("Calendar.current", "current.calendar", INDIGO),
        AutoUpdatingCalendar => ("Calendar.autoupdatingCurrent", "autoupdate.calendar", MINT),
        PreferredLanguages => ("Locale.preferredLanguages", "preferred.languages", ORANGE),
        PreferredLocalizations => (
            "Bundle.main.preferredLocalizations",
            "bundle.preferred.localizations",
            PURPLE,
        ),
    };

    ActionInfo {
        label,
        localization_key,
        color,
    }
}

impl InspectionAction {
    /// All actions, in display order.
    pub fn all() -> &'static [InspectionAction] {
        &[
            InspectionAction::CurrentLocale,
            InspectionAction::AutoUpdatingLocale,
            InspectionAction::CurrentCalendar,
            InspectionAction::AutoUpdatingCalendar,
            InspectionAction::PreferredLanguages,
            InspectionAction::PreferredLocalizations,
        ]
    }

    /// Kebab-case name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            InspectionAction::CurrentLocale => "current-locale",
            InspectionAction::AutoUpdatingLocale => "auto-updating-locale",
            InspectionAction::CurrentCalendar => "current-calendar",
            InspectionAction::AutoUpdatingCalendar => "auto-updating-calendar",
            InspectionAction::PreferredLanguages => "preferred-languages",
            InspectionAction::PreferredLocalizations => "preferred-localizations",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|action| action.name() == value)
    }

    pub fn info(&self) -> ActionInfo {
        describe(*self)
    }
}

impl fmt::Display for InspectionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
