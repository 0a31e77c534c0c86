// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end inspection against the shipped resources with a fake host

use locale_in_detail::bundle::BundleResolver;
use locale_in_detail::console::{Console, ConsoleFormat};
use locale_in_detail::inspect::inspect;
use locale_in_detail::provider::LocaleProvider;
use locale_in_detail::types::CalendarInfo;
use locale_in_detail::InspectionAction;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

fn resources() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Host whose locale can change between queries.
struct FakeHost {
    snapshot: String,
    live: RefCell<String>,
    languages: Vec<String>,
}

impl FakeHost {
    fn new(locale: &str, languages: &[&str]) -> Self {
        Self {
            snapshot: locale.to_string(),
            live: RefCell::new(locale.to_string()),
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn calendar(&self, locale: String, auto_updating: bool) -> CalendarInfo {
        CalendarInfo {
            identifier: "gregorian".to_string(),
            locale,
            time_zone: "Asia/Tokyo".to_string(),
            first_weekday: 1,
            auto_updating,
        }
    }
}

impl LocaleProvider for FakeHost {
    fn current_locale(&self) -> String {
        self.snapshot.clone()
    }
    fn auto_updating_locale(&self) -> String {
        self.live.borrow().clone()
    }
    fn current_calendar(&self) -> CalendarInfo {
        self.calendar(self.snapshot.clone(), false)
    }
    fn auto_updating_calendar(&self) -> CalendarInfo {
        self.calendar(self.live.borrow().clone(), true)
    }
    fn preferred_languages(&self) -> Vec<String> {
        self.languages.clone()
    }
    fn preferred_localizations(&self) -> Vec<String> {
        BundleResolver::new(resources()).preferred_localizations(&self.languages)
    }
}

#[test]
fn test_japanese_descriptions() {
    let resolver = BundleResolver::new(resources());
    let bundle = resolver.resolve(Some("ja"));
    let host = FakeHost::new("ja_JP", &["ja-JP", "en-US"]);

    let entry = inspect(InspectionAction::PreferredLanguages, &host, &bundle);
    assert_eq!(entry.message, "優先言語: \nja-JP, en-US");

    let entry = inspect(InspectionAction::PreferredLocalizations, &host, &bundle);
    assert_eq!(entry.message, "メインバンドルの優先ローカライズ: \nja, en");
}

#[test]
fn test_auto_updating_tracks_changes() {
    let bundle = BundleResolver::new(resources()).resolve(None);
    let host = FakeHost::new("en_US", &["en-US"]);
    *host.live.borrow_mut() = "de_DE".to_string();

    let current = inspect(InspectionAction::CurrentLocale, &host, &bundle);
    let live = inspect(InspectionAction::AutoUpdatingLocale, &host, &bundle);
    assert_eq!(current.message, "Current locale: \nen_US");
    assert_eq!(live.message, "Auto-updating locale: \nde_DE");

    let calendar = inspect(InspectionAction::AutoUpdatingCalendar, &host, &bundle);
    assert!(calendar.message.contains("gregorian (autoupdatingCurrent)"));
    assert!(calendar.message.contains("locale: de_DE"));
}

#[test]
fn test_console_session_flow() {
    let bundle = BundleResolver::new(resources()).resolve(Some("en"));
    let host = FakeHost::new("en_US", &["en-US"]);
    let mut console = Console::new();

    for action in InspectionAction::all() {
        console.append(inspect(*action, &host, &bundle));
    }
    assert_eq!(console.len(), 6);
    let order: Vec<_> = console.entries().iter().map(|e| e.action).collect();
    assert_eq!(order, InspectionAction::all());

    console.clear();
    assert!(console.is_empty());

    console.append(inspect(InspectionAction::CurrentCalendar, &host, &bundle));
    console.append(inspect(InspectionAction::CurrentLocale, &host, &bundle));
    let order: Vec<_> = console.entries().iter().map(|e| e.action).collect();
    assert_eq!(
        order,
        vec![InspectionAction::CurrentCalendar, InspectionAction::CurrentLocale]
    );

    let json = ConsoleFormat::Json.serialize(&console).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["action"], "current-locale");
}
