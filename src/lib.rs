// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-in-detail: inspect the host's locale, calendar and language
//! preferences.
//!
//! Six inspection actions each query one host value through a
//! [`provider::LocaleProvider`]. Results are described with strings from a
//! resource bundle resolved by [`bundle::BundleResolver`] (`<code>.lproj`,
//! then `Base.lproj`, then the main bundle) and appended to an in-memory
//! [`console::Console`].

pub mod action;
pub mod bundle;
pub mod console;
pub mod diagnostics;
pub mod i18n;
pub mod inspect;
pub mod provider;
pub mod session;
pub mod types;

pub use action::{describe, ActionInfo, InspectionAction};
pub use bundle::{Bundle, BundleKind, BundleResolver};
pub use console::{Console, ConsoleFormat, LogEntry};
pub use provider::{LocaleProvider, SystemLocaleProvider};
