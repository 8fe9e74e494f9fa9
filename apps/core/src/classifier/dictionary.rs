//! Category dictionary: the validated, immutable keyword table the engine
//! scores against.
//!
//! A dictionary is built once at startup through [`DictionaryBuilder`] (or
//! deserialized from a [`DictionarySpec`]) and never mutated afterwards.
//! Every structural problem is reported as a [`DictionaryError`] at build
//! time so a misconfigured table can never reach classification.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::warn;

use super::normalize::normalize;

/// Weight used when a category does not specify one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Errors raised while building a [`CategoryDictionary`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictionaryError {
    /// The dictionary declares no categories at all.
    #[error("dictionary has no categories")]
    NoCategories,

    /// A category name is empty or contains control characters.
    #[error("invalid category name: {0:?}")]
    InvalidName(String),

    /// Two categories share the same name.
    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),

    /// Weight is zero, negative, or not finite.
    #[error("category {category} has invalid weight {weight} (must be > 0)")]
    InvalidWeight { category: String, weight: f64 },

    /// A category declares no keywords.
    #[error("category {0} has no keywords")]
    EmptyKeywords(String),

    /// A keyword normalizes to the empty string and could never match.
    #[error("category {category} has a keyword that normalizes to nothing: {keyword:?}")]
    BlankKeyword { category: String, keyword: String },

    /// The fallback category is not one of the declared categories.
    #[error("fallback category {0} is not defined in the dictionary")]
    UnknownFallback(String),
}

/// Validated category identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Validate and wrap a category name. Surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DictionaryError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
            return Err(DictionaryError::InvalidName(name.as_ref().to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CategoryName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A keyword phrase together with its precomputed normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    raw: String,
    normalized: String,
    token_count: usize,
}

impl Keyword {
    fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let token_count = normalized.split_whitespace().count();
        Self {
            raw: raw.to_string(),
            normalized,
            token_count,
        }
    }

    /// The keyword exactly as written in the dictionary.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True for phrases of two or more words.
    pub fn is_phrase(&self) -> bool {
        self.token_count > 1
    }
}

/// One division of the dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: CategoryName,
    keywords: Vec<Keyword>,
    weight: f64,
}

impl Category {
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Keywords in declaration order.
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Immutable, order-preserving category table with a designated fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDictionary {
    categories: Vec<Category>,
    fallback: CategoryName,
}

impl CategoryDictionary {
    /// Start building a dictionary whose catch-all category is `fallback`.
    pub fn builder(fallback: impl Into<String>) -> DictionaryBuilder {
        DictionaryBuilder::new(fallback)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn fallback(&self) -> &CategoryName {
        &self.fallback
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name.as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Unvalidated category entry collected by the builder.
#[derive(Debug, Clone)]
struct PendingCategory {
    name: String,
    keywords: Vec<String>,
    weight: f64,
}

/// Collects categories and validates the whole table in [`DictionaryBuilder::build`].
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    fallback: String,
    pending: Vec<PendingCategory>,
}

impl DictionaryBuilder {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            pending: Vec::new(),
        }
    }

    /// Add a category. Order of calls is the dictionary's iteration order.
    pub fn category<I, S>(mut self, name: impl Into<String>, weight: f64, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending.push(PendingCategory {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            weight,
        });
        self
    }

    /// Validate every category and produce the immutable dictionary.
    pub fn build(self) -> Result<CategoryDictionary, DictionaryError> {
        if self.pending.is_empty() {
            return Err(DictionaryError::NoCategories);
        }

        let mut seen_names = HashSet::new();
        let mut categories = Vec::with_capacity(self.pending.len());

        for pending in self.pending {
            let name = CategoryName::new(&pending.name)?;
            if !seen_names.insert(name.clone()) {
                return Err(DictionaryError::DuplicateCategory(name.to_string()));
            }

            if !pending.weight.is_finite() || pending.weight <= 0.0 {
                return Err(DictionaryError::InvalidWeight {
                    category: name.to_string(),
                    weight: pending.weight,
                });
            }

            if pending.keywords.is_empty() {
                return Err(DictionaryError::EmptyKeywords(name.to_string()));
            }

            let mut seen_keywords = HashSet::new();
            let mut keywords = Vec::with_capacity(pending.keywords.len());
            for raw in &pending.keywords {
                let keyword = Keyword::new(raw);
                if keyword.normalized.is_empty() {
                    return Err(DictionaryError::BlankKeyword {
                        category: name.to_string(),
                        keyword: raw.clone(),
                    });
                }
                if !seen_keywords.insert(keyword.normalized.clone()) {
                    warn!(category = %name, keyword = %raw, "Dropping duplicate keyword");
                    continue;
                }
                keywords.push(keyword);
            }

            categories.push(Category {
                name,
                keywords,
                weight: pending.weight,
            });
        }

        let fallback = CategoryName::new(&self.fallback)
            .map_err(|_| DictionaryError::UnknownFallback(self.fallback.clone()))?;
        if !seen_names.contains(&fallback) {
            return Err(DictionaryError::UnknownFallback(fallback.to_string()));
        }

        Ok(CategoryDictionary {
            categories,
            fallback,
        })
    }
}

/// Serialized form of a dictionary, as read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySpec {
    pub fallback: String,
    pub categories: Vec<CategorySpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl TryFrom<DictionarySpec> for CategoryDictionary {
    type Error = DictionaryError;

    fn try_from(spec: DictionarySpec) -> Result<Self, Self::Error> {
        spec.categories
            .into_iter()
            .fold(DictionaryBuilder::new(spec.fallback), |builder, c| {
                builder.category(c.name, c.weight, c.keywords)
            })
            .build()
    }
}
