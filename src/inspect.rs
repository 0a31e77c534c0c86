// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runs inspection actions against a provider.

use crate::action::InspectionAction;
use crate::bundle::Bundle;
use crate::console::LogEntry;
use crate::provider::LocaleProvider;

/// Raw value of `action`, before any localization.
pub fn query(action: InspectionAction, provider: &dyn LocaleProvider) -> String {
    match action {
        InspectionAction::CurrentLocale => provider.current_locale(),
        InspectionAction::AutoUpdatingLocale => provider.auto_updating_locale(),
        InspectionAction::CurrentCalendar => provider.current_calendar().to_string(),
        InspectionAction::AutoUpdatingCalendar => provider.auto_updating_calendar().to_string(),
        InspectionAction::PreferredLanguages => provider.preferred_languages().join(", "),
        InspectionAction::PreferredLocalizations => provider.preferred_localizations().join(", "),
    }
}

/// Build the console entry for `action`: localized description, a line
/// break, then the value.
pub fn inspect(action: InspectionAction, provider: &dyn LocaleProvider, bundle: &Bundle) -> LogEntry {
    let description = bundle.localized_string(action.info().localization_key);
    let value = query(action, provider);
    LogEntry::new(format!("{}: \n{}", description, value), action)
}
