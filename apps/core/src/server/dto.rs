//! Request and response bodies of the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError};

use crate::classifier::{CategoryName, ConfidenceLevel, Method, Suggestion};

/// Largest batch accepted by `/classify-batch`.
pub const MAX_BATCH_ITEMS: usize = 50;

/// Matched keywords echoed by the plain `/classify` endpoint.
pub const MAX_MATCHED_KEYWORDS: usize = 10;

/// Sample keywords listed per category by `/categories`.
pub const SAMPLE_KEYWORDS: usize = 5;

fn not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("Text is required")));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnhancedRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub text: String,
    /// Number of suggestions; the configured default when absent.
    #[validate(range(min = 1, max = 20))]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "texts must hold between 1 and 50 items"))]
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub category: CategoryName,
    pub confidence: f64,
    pub matched_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhancedResponse {
    pub category: CategoryName,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub matched_keywords: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub all_scores: BTreeMap<CategoryName, f64>,
    pub method: Method,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub original_text: String,
    pub category: CategoryName,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    pub keyword_count: usize,
    pub sample_keywords: Vec<String>,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    /// Category names in dictionary order.
    pub categories: Vec<CategoryName>,
    pub total_categories: usize,
    pub fallback: CategoryName,
    pub details: BTreeMap<CategoryName, CategoryDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub method: &'static str,
    pub categories: Vec<CategoryName>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: f64,
    pub requests_processed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
