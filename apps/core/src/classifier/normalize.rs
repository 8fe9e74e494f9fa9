//! Text normalization shared by ticket text and dictionary keywords.
//!
//! Both sides of every comparison go through [`normalize`], so casing,
//! punctuation and stray Unicode never decide whether a keyword matches.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant
static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z0-9\s/-]").expect("Invalid regex: normalization character class")
});

/// Lowercase `text`, replace every character outside `[a-z0-9/-]` and
/// whitespace with a space, and collapse whitespace runs to single spaces.
///
/// The output of this function is a fixed point: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = DISALLOWED_CHARS.replace_all(&lowered, " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Distinct whitespace-delimited tokens of an already normalized string.
pub fn token_set(normalized: &str) -> HashSet<&str> {
    normalized.split_whitespace().collect()
}
