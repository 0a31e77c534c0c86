// SPDX-License-Identifier: PMPL-1.0-or-later

//! The shipped string tables parse and cover every key

use locale_in_detail::bundle::{strings, BundleResolver, STRINGS_FILE};
use locale_in_detail::InspectionAction;
use std::path::Path;

const CONSOLE_KEYS: &[&str] = &["console", "console.empty", "console.cleared"];

#[test]
fn test_every_shipped_table_is_complete() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
    let resolver = BundleResolver::new(&root);
    let localizations = resolver.localizations();
    assert_eq!(localizations, vec!["Base", "en", "ja"]);

    for code in &localizations {
        let path = root.join(format!("{code}.lproj")).join(STRINGS_FILE);
        let table = strings::load(&path).expect("shipped table should parse");

        for action in InspectionAction::all() {
            let key = action.info().localization_key;
            assert!(table.contains_key(key), "{code} is missing {key}");
        }
        for key in CONSOLE_KEYS {
            assert!(table.contains_key(*key), "{code} is missing {key}");
        }
    }
}

#[test]
fn test_console_header_is_localized() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
    let resolver = BundleResolver::new(root);

    assert_eq!(resolver.resolve(Some("ja")).localized_string("console"), "コンソール");
    assert_eq!(resolver.resolve(Some("en")).localized_string("console"), "Console");
    assert_eq!(resolver.resolve(Some("ko")).localized_string("console"), "Console");
}

#[test]
fn test_embedded_strings_match_base_table() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
    let base = strings::load(&root.join("Base.lproj").join(STRINGS_FILE)).unwrap();
    let embedded = locale_in_detail::i18n::development_strings();
    assert_eq!(base, embedded);
}
