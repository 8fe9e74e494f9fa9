//! Route handlers. Each one validates its payload, then hands plain text to
//! the shared [`ClassificationEngine`](crate::classifier::ClassificationEngine).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::collections::BTreeMap;
use tracing::{info, warn};
use validator::Validate;

use super::dto::{
    BatchItem, BatchRequest, BatchResponse, CategoriesResponse, CategoryDetail, ClassifyRequest,
    ClassifyResponse, EnhancedRequest, EnhancedResponse, HealthResponse, ServiceInfo,
    MAX_MATCHED_KEYWORDS, SAMPLE_KEYWORDS,
};
use super::AppState;
use crate::classifier::CategoryName;
use crate::error::{AppError, Result};

const SERVICE_NAME: &str = "NLP Ticket Classifier";

/// Unwrap a JSON body, turning extractor rejections into 400s.
fn body<T: Validate>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected request body");
        AppError::Validation(rejection.body_text())
    })?;
    request.validate()?;
    Ok(request)
}

fn check_length(state: &AppState, text: &str) -> Result<()> {
    let len = text.chars().count();
    if len > state.limits.max_text_len {
        return Err(AppError::Validation(format!(
            "Text is too long ({} characters, maximum {})",
            len, state.limits.max_text_len
        )));
    }
    Ok(())
}

pub async fn home(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        method: "keyword-based",
        categories: state.category_names(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.started.elapsed().as_secs_f64();
    Json(HealthResponse {
        status: "ok",
        model_loaded: !state.engine.dictionary().is_empty(),
        started_at: state.started_at,
        uptime_seconds: (uptime * 100.0).round() / 100.0,
        requests_processed: state.requests_processed(),
    })
}

pub async fn classify(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>> {
    state.record_request();
    let request = body(payload)?;
    check_length(&state, &request.text)?;

    let result = state.engine.classify(request.text.trim());
    info!(category = %result.category, confidence = result.confidence, "POST /classify");

    Ok(Json(ClassifyResponse {
        category: result.category,
        confidence: result.confidence,
        matched_keywords: result
            .matched_keywords
            .into_iter()
            .take(MAX_MATCHED_KEYWORDS)
            .collect(),
    }))
}

pub async fn classify_enhanced(
    State(state): State<AppState>,
    payload: std::result::Result<Json<EnhancedRequest>, JsonRejection>,
) -> Result<Json<EnhancedResponse>> {
    state.record_request();
    let request = body(payload)?;
    check_length(&state, &request.text)?;

    let limit = request.limit.unwrap_or(state.limits.suggestion_limit);
    let result = state.engine.classify(request.text.trim());
    let suggestions = state.engine.suggestions(&result, limit);

    Ok(Json(EnhancedResponse {
        confidence_level: result.confidence_level(),
        category: result.category,
        confidence: result.confidence,
        matched_keywords: result.matched_keywords,
        suggestions,
        all_scores: result.all_scores,
        method: result.method,
    }))
}

pub async fn classify_batch(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>> {
    state.record_request();
    let request = body(payload)?;
    for text in &request.texts {
        check_length(&state, text)?;
    }

    let results: Vec<BatchItem> = request
        .texts
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .map(|text| {
            let result = state.engine.classify(&text);
            BatchItem {
                original_text: text,
                category: result.category,
                confidence: result.confidence,
            }
        })
        .collect();

    info!(classified = results.len(), "POST /classify-batch");
    Ok(Json(BatchResponse { results }))
}

pub async fn categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let dictionary = state.engine.dictionary();
    let details: BTreeMap<CategoryName, CategoryDetail> = dictionary
        .categories()
        .iter()
        .map(|category| {
            let detail = CategoryDetail {
                keyword_count: category.keywords().len(),
                sample_keywords: category
                    .keywords()
                    .iter()
                    .take(SAMPLE_KEYWORDS)
                    .map(|k| k.raw().to_string())
                    .collect(),
                weight: category.weight(),
            };
            (category.name().clone(), detail)
        })
        .collect();

    let categories = state.category_names();
    Json(CategoriesResponse {
        total_categories: categories.len(),
        categories,
        fallback: dictionary.fallback().clone(),
        details,
    })
}
