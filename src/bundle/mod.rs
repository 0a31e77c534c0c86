// SPDX-License-Identifier: PMPL-1.0-or-later

//! Resource bundle resolution.
//!
//! A bundle root (the "main bundle") holds one `<code>.lproj` directory per
//! localization, each optionally containing a `Localizable.strings` table.
//! Resolution cascades: the requested language, then `Base.lproj`, then the
//! main bundle itself. It never fails.

pub mod strings;

use crate::i18n;
use crate::types::{BASE_LANGUAGE, DEVELOPMENT_LOCALIZATION};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const LPROJ_EXTENSION: &str = "lproj";
pub const STRINGS_FILE: &str = "Localizable.strings";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleKind {
    /// A `<code>.lproj` directory.
    Localized { code: String },
    /// The application's own bundle.
    Main,
}

/// A resolved bundle and its string table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub kind: BundleKind,
    pub path: PathBuf,
    strings: HashMap<String, String>,
}

impl Bundle {
    /// The main bundle at `root`, carrying the embedded development strings.
    pub fn main(root: &Path) -> Self {
        Self {
            kind: BundleKind::Main,
            path: root.to_path_buf(),
            strings: i18n::development_strings(),
        }
    }

    /// A localized bundle. An unreadable or malformed table leaves the
    /// bundle without strings.
    fn localized(code: &str, path: PathBuf) -> Self {
        let table = path.join(STRINGS_FILE);
        let strings = if table.is_file() {
            strings::load(&table).unwrap_or_else(|err| {
                warn!("ignoring string table: {:#}", err);
                HashMap::new()
            })
        } else {
            HashMap::new()
        };
        Self {
            kind: BundleKind::Localized {
                code: code.to_string(),
            },
            path,
            strings,
        }
    }

    pub fn is_main(&self) -> bool {
        self.kind == BundleKind::Main
    }

    /// Localization code of this bundle, `None` for the main bundle.
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            BundleKind::Localized { code } => Some(code.as_str()),
            BundleKind::Main => None,
        }
    }

    /// Localized value for `key`, or the key itself when the table has no
    /// entry.
    pub fn localized_string<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}

/// Resolves language codes to bundles under one main bundle root.
#[derive(Debug, Clone)]
pub struct BundleResolver {
    root: PathBuf,
}

impl BundleResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `code` (absent means `"Base"`) to a bundle.
    pub fn resolve(&self, code: Option<&str>) -> Bundle {
        self.resolve_code(code.unwrap_or(BASE_LANGUAGE))
    }

    fn resolve_code(&self, code: &str) -> Bundle {
        if code != BASE_LANGUAGE && !i18n::is_valid_iso639_1(i18n::primary_subtag(code)) {
            debug!(code, "resolving non-ISO 639-1 language code");
        }

        for candidate in [code, BASE_LANGUAGE] {
            if let Some(path) = self.locate(candidate) {
                debug!(requested = code, found = candidate, path = %path.display(), "resolved bundle");
                return Bundle::localized(candidate, path);
            }
        }

        debug!(requested = code, root = %self.root.display(), "falling back to main bundle");
        Bundle::main(&self.root)
    }

    /// `<root>/<code>.lproj`, if it is a non-empty directory. A missing
    /// directory and an empty one are both "not found".
    fn locate(&self, code: &str) -> Option<PathBuf> {
        let path = self.root.join(format!("{}.{}", code, LPROJ_EXTENSION));
        is_populated_dir(&path).then_some(path)
    }

    /// Codes of every usable `.lproj` directory under the root, sorted.
    /// `Base` is included when present.
    pub fn localizations(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut codes: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == LPROJ_EXTENSION)
                    .unwrap_or(false)
            })
            .filter(|path| is_populated_dir(path))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();
        codes.sort();
        codes
    }

    /// Localizations of this bundle ordered by the user's preferences.
    pub fn preferred_localizations(&self, preferred: &[String]) -> Vec<String> {
        preferred_localizations(&self.localizations(), preferred, DEVELOPMENT_LOCALIZATION)
    }
}

fn is_populated_dir(path: &Path) -> bool {
    path.is_dir()
        && fs::read_dir(path)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false)
}

/// Pick the available localizations that match the preferred languages.
///
/// Each preferred language matches the longest available tag it starts
/// with (`zh-Hant-TW` tries `zh-Hant-TW`, `zh-Hant`, `zh`), then any
/// localization with the same primary language subtag. `Base` never
/// matches. With no match at all the result is `[development]`.
pub fn preferred_localizations(
    available: &[String],
    preferred: &[String],
    development: &str,
) -> Vec<String> {
    let candidates: Vec<&String> = available
        .iter()
        .filter(|code| code.as_str() != BASE_LANGUAGE)
        .collect();
    let mut picked: Vec<String> = Vec::new();

    for language in preferred {
        let normalized = language.replace('_', "-");
        let matched = tag_prefixes(&normalized)
            .find_map(|prefix| candidates.iter().copied().find(|code| same_tag(code, prefix)))
            .or_else(|| {
                let primary = i18n::primary_subtag(&normalized);
                candidates
                    .iter()
                    .copied()
                    .find(|code| i18n::primary_subtag(code).eq_ignore_ascii_case(primary))
            });
        if let Some(code) = matched {
            if !picked.contains(code) {
                picked.push(code.clone());
            }
        }
    }

    if picked.is_empty() {
        picked.push(development.to_string());
    }
    picked
}

/// `a-b-c`, `a-b`, `a`.
fn tag_prefixes(tag: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(tag), |&t| t.rfind('-').map(|idx| &t[..idx]))
}

fn same_tag(code: &str, tag: &str) -> bool {
    code.replace('_', "-").eq_ignore_ascii_case(tag)
}
