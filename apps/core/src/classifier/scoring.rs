//! Per-category keyword scoring.
//!
//! Three evidence tiers, each multiplied by the category weight:
//! - multi-word phrase found contiguously in the text: 3.0
//! - single word equal to an input token: 2.0
//! - single word contained in a longer input token: 1.0 (reported as `~keyword`)

use std::collections::{BTreeSet, HashSet};

use super::dictionary::Category;

pub const PHRASE_SCORE: f64 = 3.0;
pub const EXACT_SCORE: f64 = 2.0;
pub const PARTIAL_SCORE: f64 = 1.0;

/// Marker prepended to keywords that only matched inside a longer token.
pub const PARTIAL_MARKER: char = '~';

/// Keywords shorter than this never take part in substring matching.
pub const DEFAULT_MIN_PARTIAL_LEN: usize = 3;

/// Normalized input text, prepared once and scored against every category.
#[derive(Debug)]
pub struct PreparedText<'a> {
    normalized: &'a str,
    tokens: HashSet<&'a str>,
}

impl<'a> PreparedText<'a> {
    pub fn new(normalized: &'a str) -> Self {
        Self {
            normalized,
            tokens: super::normalize::token_set(normalized),
        }
    }
}

/// Score and evidence for a single category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryScore {
    pub score: f64,
    pub matched: BTreeSet<String>,
}

/// Score `category` against `text`.
///
/// Each keyword contributes at most once. `min_partial_len` is the minimum
/// keyword length, in characters, for the substring tier.
pub fn score_category(
    text: &PreparedText<'_>,
    category: &Category,
    min_partial_len: usize,
) -> CategoryScore {
    let weight = category.weight();
    let mut result = CategoryScore::default();

    for keyword in category.keywords() {
        let needle = keyword.normalized();

        if keyword.is_phrase() {
            if text.normalized.contains(needle) {
                result.score += PHRASE_SCORE * weight;
                result.matched.insert(keyword.raw().to_string());
            }
        } else if text.tokens.contains(needle) {
            result.score += EXACT_SCORE * weight;
            result.matched.insert(keyword.raw().to_string());
        } else if needle.chars().count() >= min_partial_len
            && text.tokens.iter().any(|token| token.contains(needle))
        {
            result.score += PARTIAL_SCORE * weight;
            result.matched.insert(format!("{}{}", PARTIAL_MARKER, keyword.raw()));
        }
    }

    result
}
