//! HTTP Surface Tests
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`.

use crate::classifier::{CategoryDictionary, ClassificationEngine};
use crate::server::dto::MAX_BATCH_ITEMS;
use crate::server::{create_router, AppState, RequestLimits};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

fn test_state() -> AppState {
    let dictionary = CategoryDictionary::builder("General")
        .category("IT", 1.0, ["internet", "printer", "wifi", "email", "server", "blue screen"])
        .category("HR", 1.0, ["cuti sakit", "gaji", "lembur"])
        .category("General", 0.3, ["info", "help"])
        .build()
        .expect("test dictionary is valid");

    AppState::new(
        Arc::new(ClassificationEngine::new(dictionary)),
        RequestLimits {
            max_text_len: 200,
            suggestion_limit: 3,
        },
    )
}

fn test_router() -> Router {
    create_router(test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn post_raw(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, &body.to_string()).await
}

#[cfg(test)]
mod classify_tests {
    use super::*;

    #[tokio::test]
    async fn test_classify_returns_category() {
        let (status, body) = post_json(
            test_router(),
            "/classify",
            json!({"text": "Internet kantor sangat lambat"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "IT");
        assert_eq!(body["confidence"], 0.2);
        assert_eq!(body["matched_keywords"], json!(["internet"]));
    }

    #[tokio::test]
    async fn test_classify_truncates_matched_keywords() {
        let dictionary = CategoryDictionary::builder("General")
            .category("IT", 1.0, (0..15).map(|i| format!("kw{}", i)))
            .category("General", 0.3, ["info"])
            .build()
            .unwrap();
        let state = AppState::new(
            Arc::new(ClassificationEngine::new(dictionary)),
            RequestLimits {
                max_text_len: 1000,
                suggestion_limit: 3,
            },
        );
        let text: Vec<String> = (0..15).map(|i| format!("kw{}", i)).collect();

        let (status, body) =
            post_json(create_router(state), "/classify", json!({"text": text.join(" ")})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matched_keywords"].as_array().unwrap().len(), 10);
        assert_eq!(body["confidence"], 1.0);
    }

    #[tokio::test]
    async fn test_classify_rejects_blank_text() {
        let (status, body) = post_json(test_router(), "/classify", json!({"text": "   "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Text is required"));

        let (status, _) = post_json(test_router(), "/classify", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_classify_rejects_malformed_json() {
        let (status, body) = post_raw(test_router(), "/classify", "{\"text\": ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_classify_rejects_oversized_text() {
        let long = "internet ".repeat(50);
        let (status, body) = post_json(test_router(), "/classify", json!({"text": long})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("too long"));
    }

    #[tokio::test]
    async fn test_classify_no_match_is_ok() {
        let (status, body) = post_json(
            test_router(),
            "/classify",
            json!({"text": "xyz totally unrelated gibberish"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "General");
        assert_eq!(body["confidence"], 0.0);
    }
}

#[cfg(test)]
mod enhanced_tests {
    use super::*;

    #[tokio::test]
    async fn test_enhanced_includes_scores_and_suggestions() {
        let (status, body) = post_json(
            test_router(),
            "/classify-enhanced",
            json!({"text": "blue screen waktu buka slip gaji, butuh help"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "IT");
        assert_eq!(body["method"], "keyword_matching");
        assert_eq!(body["confidence_level"], "low");
        assert_eq!(body["all_scores"]["IT"], 3.0);
        assert_eq!(body["all_scores"]["HR"], 2.0);
        assert_eq!(body["all_scores"]["General"], 0.6);

        let suggestions = body["suggestions"].as_array().unwrap();
        let names: Vec<&str> = suggestions
            .iter()
            .map(|s| s["category"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["IT", "HR", "General"]);
        assert_eq!(suggestions[1]["confidence"], 0.2);
    }

    #[tokio::test]
    async fn test_enhanced_respects_limit() {
        let (status, body) = post_json(
            test_router(),
            "/classify-enhanced",
            json!({"text": "blue screen waktu buka slip gaji, butuh help", "limit": 1}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_enhanced_no_match_method() {
        let (status, body) =
            post_json(test_router(), "/classify-enhanced", json!({"text": "qwerty asdf"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["method"], "no_match_found");
        assert!(body["suggestions"].as_array().unwrap().is_empty());
    }
}

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[tokio::test]
    async fn test_batch_classifies_and_skips_blank() {
        let (status, body) = post_json(
            test_router(),
            "/classify-batch",
            json!({"texts": ["printer rusak", "  ", "mau cuti sakit", ""]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["original_text"], "printer rusak");
        assert_eq!(results[0]["category"], "IT");
        assert_eq!(results[1]["category"], "HR");
        assert_eq!(results[1]["confidence"], 0.3);
    }

    #[tokio::test]
    async fn test_batch_rejects_51_items() {
        let texts: Vec<String> = (0..=MAX_BATCH_ITEMS).map(|i| format!("printer {}", i)).collect();
        assert_eq!(texts.len(), 51);

        let state = test_state();
        let router = create_router(state.clone());
        let (status, body) = post_json(router, "/classify-batch", json!({ "texts": texts })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_batch_accepts_50_items() {
        let texts: Vec<String> = (0..MAX_BATCH_ITEMS).map(|i| format!("printer {}", i)).collect();
        let (status, body) =
            post_json(test_router(), "/classify-batch", json!({ "texts": texts })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), MAX_BATCH_ITEMS);
    }

    #[tokio::test]
    async fn test_batch_rejects_non_list_and_empty() {
        let (status, _) =
            post_json(test_router(), "/classify-batch", json!({"texts": "printer"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(test_router(), "/classify-batch", json!({"texts": []})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(test_router(), "/classify-batch", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod info_tests {
    use super::*;

    #[tokio::test]
    async fn test_categories_listing() {
        let (status, body) = get(test_router(), "/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["categories"], json!(["IT", "HR", "General"]));
        assert_eq!(body["total_categories"], 3);
        assert_eq!(body["fallback"], "General");
        assert_eq!(body["details"]["IT"]["keyword_count"], 6);
        assert_eq!(body["details"]["IT"]["sample_keywords"].as_array().unwrap().len(), 5);
        assert_eq!(body["details"]["General"]["weight"], 0.3);
    }

    #[tokio::test]
    async fn test_home_lists_service() {
        let (status, body) = get(test_router(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["method"], "keyword-based");
        assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_health_counts_classify_requests() {
        let state = test_state();

        for _ in 0..2 {
            let router = create_router(state.clone());
            let (status, _) = post_json(router, "/classify", json!({"text": "printer"})).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = get(create_router(state.clone()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model_loaded"], true);
        assert_eq!(body["requests_processed"], 2);
        assert!(body["uptime_seconds"].as_f64().unwrap() >= 0.0);
        assert_eq!(state.requests_processed(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = get(test_router(), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
