// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded strings and language metadata.
//!
//! The main bundle has no `Localizable.strings` file of its own; its table
//! is the development-language catalog compiled into the binary. Localized
//! tables live on disk in `<code>.lproj` directories (see [`crate::bundle`]).
//!
//! Keys use dotted namespaces: `"current.locale"`, `"console.cleared"`.

mod catalog;
mod iso639;

pub use catalog::development_strings;
pub use iso639::{is_valid_iso639_1, language_name, native_name, primary_subtag};
