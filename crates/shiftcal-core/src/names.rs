//! Worker name normalization.
//!
//! Shift lines carry names with stray punctuation and duty annotations
//! (`Jane Doe (opvask)`). [`normalize_name`] reduces such a token to the
//! lowercase key used for matching and deduplication, and [`extract_note`]
//! recovers the annotation itself.

use std::sync::LazyLock;

use regex::Regex;

/// Duty annotations recognised after a name.
pub const DUTY_KEYWORDS: &[&str] = &["rengøring", "rengør", "støvsug", "opvask", "vask", "clean", "note"];

/// Characters that can never be part of a name.
static NON_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\s.\-]").expect("Invalid name charset regex"));

/// A duty keyword and everything after it.
static DUTY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)\b({}).*", DUTY_KEYWORDS.join("|"))).expect("Invalid duty suffix regex")
});

/// A parenthesised duty annotation, e.g. `(opvask)`.
static DUTY_NOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\(\s*({})\s*\)", DUTY_KEYWORDS.join("|"))).expect("Invalid duty note regex")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Separators between names in a shift line: commas or the word "og".
static NAME_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i),|\s+og\s+").expect("Invalid name separator regex"));

/// Normalizes a raw name token into its matching key.
///
/// Strips everything but letters, whitespace, `.` and `-`, cuts off any duty
/// annotation, collapses whitespace and lowercases. Returns an empty string
/// when nothing name-like remains.
///
/// ```
/// use shiftcal_core::names::normalize_name;
///
/// assert_eq!(normalize_name("Jane Doe (opvask)"), "jane doe");
/// assert_eq!(normalize_name("jane   doe"), "jane doe");
/// assert_eq!(normalize_name("???"), "");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let cleaned = NON_NAME_CHARS.replace_all(raw, "");
    let cleaned = DUTY_SUFFIX.replace(cleaned.trim(), "");
    WHITESPACE
        .replace_all(cleaned.trim(), " ")
        .to_lowercase()
}

/// Extracts a parenthesised duty annotation from a raw name token.
pub fn extract_note(raw: &str) -> Option<String> {
    DUTY_NOTE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Splits the name list of a shift line into raw name tokens.
pub fn split_names(list: &str) -> impl Iterator<Item = &str> {
    NAME_SEPARATOR.split(list)
}

/// Renders a normalized key for display: `anne-marie hansen` → `Anne-Marie Hansen`.
pub fn display_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;
    for c in key.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
