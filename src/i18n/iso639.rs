// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language metadata.
//!
//! Used to annotate localization listings and to flag unusual codes in
//! debug output. Resolution itself accepts any code.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// `(code, English name, native name)`, sorted by code.
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("ar", "Arabic", "العربية"),
    ("cs", "Czech", "Čeština"),
    ("da", "Danish", "Dansk"),
    ("de", "German", "Deutsch"),
    ("el", "Greek", "Ελληνικά"),
    ("en", "English", "English"),
    ("es", "Spanish", "Español"),
    ("fi", "Finnish", "Suomi"),
    ("fr", "French", "Français"),
    ("he", "Hebrew", "עברית"),
    ("hi", "Hindi", "हिन्दी"),
    ("hu", "Hungarian", "Magyar"),
    ("id", "Indonesian", "Bahasa Indonesia"),
    ("it", "Italian", "Italiano"),
    ("ja", "Japanese", "日本語"),
    ("ko", "Korean", "한국어"),
    ("ms", "Malay", "Bahasa Melayu"),
    ("nb", "Norwegian Bokmål", "Norsk bokmål"),
    ("nl", "Dutch", "Nederlands"),
    ("pl", "Polish", "Polski"),
    ("pt", "Portuguese", "Português"),
    ("ro", "Romanian", "Română"),
    ("ru", "Russian", "Русский"),
    ("sv", "Swedish", "Svenska"),
    ("th", "Thai", "ไทย"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "Українська"),
    ("vi", "Vietnamese", "Tiếng Việt"),
    ("zh", "Chinese", "中文"),
];

/// Remaining two-letter codes with no display names here.
const OTHER_CODES: &[&str] = &[
    "aa", "ab", "af", "ak", "am", "an", "as", "av", "ay", "az", "ba", "be", "bg", "bh", "bi",
    "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cu", "cv", "cy", "dv", "dz",
    "ee", "eo", "et", "eu", "fa", "ff", "fj", "fo", "fy", "ga", "gd", "gl", "gn", "gu", "gv",
    "ha", "ho", "hr", "ht", "hy", "hz", "ia", "ie", "ig", "ii", "ik", "io", "is", "iu", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "kr", "ks", "ku", "kv", "kw", "ky", "la",
    "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr",
    "mt", "my", "na", "nd", "ne", "ng", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or",
    "os", "pa", "pi", "ps", "qu", "rm", "rn", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sw", "ta", "te", "tg", "ti", "tk",
    "tl", "tn", "to", "ts", "tt", "tw", "ty", "ug", "ur", "uz", "ve", "vo", "wa", "wo", "xh",
    "yi", "yo", "za", "zu",
];

fn entry(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    LANGUAGES
        .binary_search_by(|(c, _, _)| (*c).cmp(code))
        .ok()
        .map(|idx| &LANGUAGES[idx])
}

/// Primary language subtag of an identifier: `"pt-BR"` and `"pt_BR"` give
/// `"pt"`.
pub fn primary_subtag(code: &str) -> &str {
    code.split(['-', '_']).next().unwrap_or(code)
}

/// Whether `code` is an ISO 639-1 two-letter code (lowercase only).
///
/// # Examples
/// ```
/// assert!(locale_in_detail::i18n::is_valid_iso639_1("ja"));
/// assert!(!locale_in_detail::i18n::is_valid_iso639_1("xx"));
/// assert!(!locale_in_detail::i18n::is_valid_iso639_1("Base"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    entry(code).is_some() || OTHER_CODES.contains(&code)
}

/// English name of the language of `code`, region suffixes ignored.
pub fn language_name(code: &str) -> Option<&'static str> {
    entry(primary_subtag(code)).map(|(_, name, _)| *name)
}

/// Name of the language of `code` in its own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    entry(primary_subtag(code)).map(|(_, _, native)| *native)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(LANGUAGES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("ja"));
        assert!(is_valid_iso639_1("zu"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("eng"));
        assert!(!is_valid_iso639_1("EN"));
    }

    #[test]
    fn names_ignore_region() {
        assert_eq!(language_name("ja"), Some("Japanese"));
        assert_eq!(language_name("pt-BR"), Some("Portuguese"));
        assert_eq!(native_name("de_AT"), Some("Deutsch"));
        assert_eq!(language_name("Base"), None);
    }
}
