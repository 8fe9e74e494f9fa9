//! Classification engine.
//!
//! Scores every category of an immutable [`CategoryDictionary`], picks the
//! winner, and derives a saturating confidence. Classification never fails:
//! empty input and zero-score input both resolve to the fallback category.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use super::dictionary::{CategoryDictionary, CategoryName};
use super::normalize::normalize;
use super::scoring::{score_category, CategoryScore, PreparedText, DEFAULT_MIN_PARTIAL_LEN};

/// Winning score at which confidence saturates to 1.0.
pub const CONFIDENCE_SCALE: f64 = 10.0;

/// Characters of input echoed into debug logs.
const LOG_PREVIEW_CHARS: usize = 100;

/// How a result was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Input was empty or whitespace only; nothing was scored.
    EmptyInput,
    /// Every category scored zero.
    NoMatchFound,
    /// A category won on keyword evidence.
    KeywordMatching,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::EmptyInput => "empty_input",
            Method::NoMatchFound => "no_match_found",
            Method::KeywordMatching => "keyword_matching",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse bucket of a confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.8 {
            ConfidenceLevel::High
        } else if confidence >= 0.5 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Outcome of classifying one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Winning category, or the fallback.
    pub category: CategoryName,
    /// Saturating confidence in `[0.0, 1.0]`, two decimals.
    pub confidence: f64,
    /// Keywords behind the winning score, sorted. Partial hits carry a `~` prefix.
    pub matched_keywords: Vec<String>,
    /// Score of every category, two decimals. Empty for [`Method::EmptyInput`].
    pub all_scores: BTreeMap<CategoryName, f64>,
    pub method: Method,
}

impl ClassificationResult {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

/// One ranked alternative category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub category: CategoryName,
    pub score: f64,
    pub confidence: f64,
}

/// Tunables of the engine that do not belong to the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Minimum keyword length for substring matches.
    pub min_partial_len: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_partial_len: DEFAULT_MIN_PARTIAL_LEN,
        }
    }
}

/// Keyword classifier over an immutable dictionary.
///
/// Holds no mutable state, so a single instance can be shared across
/// threads and requests without locking.
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    dictionary: CategoryDictionary,
    options: EngineOptions,
}

impl ClassificationEngine {
    pub fn new(dictionary: CategoryDictionary) -> Self {
        Self::with_options(dictionary, EngineOptions::default())
    }

    pub fn with_options(dictionary: CategoryDictionary, options: EngineOptions) -> Self {
        Self { dictionary, options }
    }

    pub fn dictionary(&self) -> &CategoryDictionary {
        &self.dictionary
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Classify a ticket text into exactly one category.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        if text.trim().is_empty() {
            return self.fallback_result(Method::EmptyInput, BTreeMap::new());
        }

        debug!(preview = %preview(text), "Classifying text");

        let normalized = normalize(text);
        let prepared = PreparedText::new(&normalized);

        let mut all_scores = BTreeMap::new();
        let mut best: Option<(&CategoryName, CategoryScore)> = None;

        for category in self.dictionary.categories() {
            let mut scored = score_category(&prepared, category, self.options.min_partial_len);
            // Selection and suggestion ranking both compare the reported value.
            scored.score = round2(scored.score);
            all_scores.insert(category.name().clone(), scored.score);

            let better = match &best {
                None => true,
                Some((best_name, best_score)) => {
                    outranks(scored.score, category.name(), best_score.score, best_name)
                }
            };
            if better {
                best = Some((category.name(), scored));
            }
        }

        let (winner, winning) = match best {
            Some((name, scored)) if scored.score > 0.0 => (name.clone(), scored),
            _ => {
                let result = self.fallback_result(Method::NoMatchFound, all_scores);
                info!(category = %result.category, method = %result.method, "No keyword matched");
                return result;
            }
        };

        let result = ClassificationResult {
            category: winner,
            confidence: confidence_for(winning.score),
            matched_keywords: winning.matched.into_iter().collect(),
            all_scores,
            method: Method::KeywordMatching,
        };

        info!(
            category = %result.category,
            confidence = result.confidence,
            matched = result.matched_keywords.len(),
            "Classified text"
        );
        result
    }

    /// Rank the non-zero categories of `result`, best first, at most `limit`
    /// entries (`0` means no limit).
    pub fn suggestions(&self, result: &ClassificationResult, limit: usize) -> Vec<Suggestion> {
        let mut ranked: Vec<Suggestion> = result
            .all_scores
            .iter()
            .filter(|(_, &score)| score > 0.0)
            .map(|(category, &score)| Suggestion {
                category: category.clone(),
                score,
                confidence: confidence_for(score),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });

        if limit > 0 {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Classify `text` and rank its candidate categories.
    pub fn suggest(&self, text: &str, limit: usize) -> Vec<Suggestion> {
        self.suggestions(&self.classify(text), limit)
    }

    fn fallback_result(
        &self,
        method: Method,
        all_scores: BTreeMap<CategoryName, f64>,
    ) -> ClassificationResult {
        ClassificationResult {
            category: self.dictionary.fallback().clone(),
            confidence: 0.0,
            matched_keywords: Vec::new(),
            all_scores,
            method,
        }
    }
}

/// Higher score wins; equal scores go to the alphabetically smaller name.
fn outranks(score: f64, name: &CategoryName, best_score: f64, best_name: &CategoryName) -> bool {
    match score.partial_cmp(&best_score) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => name < best_name,
        _ => false,
    }
}

/// `min(score / 10, 1)` rounded to two decimals.
pub fn confidence_for(score: f64) -> f64 {
    round2((score / CONFIDENCE_SCALE).clamp(0.0, 1.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    if text.chars().nth(LOG_PREVIEW_CHARS).is_some() {
        out.push_str("...");
    }
    out
}
