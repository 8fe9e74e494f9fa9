//! HTTP surface of the classifier.
//!
//! A thin axum layer: shared immutable engine in [`AppState`], JSON in and
//! out, request validation before anything reaches the classifier.

pub mod dto;
pub mod handlers;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::classifier::{CategoryName, ClassificationEngine};
use crate::config::AppConfig;
use crate::error::{AppError, Result};
use dto::ErrorBody;

/// Per-request limits enforced before classification.
#[derive(Debug, Clone, Copy)]
pub struct RequestLimits {
    pub max_text_len: usize,
    pub suggestion_limit: usize,
}

impl From<&AppConfig> for RequestLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_text_len: config.max_text_len,
            suggestion_limit: config.suggestion_limit,
        }
    }
}

/// State shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ClassificationEngine>,
    pub limits: RequestLimits,
    started: Instant,
    started_at: DateTime<Utc>,
    requests: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(engine: Arc<ClassificationEngine>, limits: RequestLimits) -> Self {
        Self {
            engine,
            limits,
            started: Instant::now(),
            started_at: Utc::now(),
            requests: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of classify requests received so far.
    pub fn requests_processed(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    fn category_names(&self) -> Vec<CategoryName> {
        self.engine
            .dictionary()
            .categories()
            .iter()
            .map(|c| c.name().clone())
            .collect()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("categories", &self.engine.dictionary().len())
            .field("limits", &self.limits)
            .field("requests_processed", &self.requests_processed())
            .finish()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            warn!(error = %self, "Bad request");
            let body = ErrorBody {
                error: match &self {
                    AppError::Validation(msg) => msg.clone(),
                    other => other.to_string(),
                },
                detail: None,
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        error!(error = %self, "Request failed");
        let body = ErrorBody {
            error: "Classification failed".to_string(),
            detail: Some(self.to_string()),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Build the router with all routes, CORS and request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/classify", post(handlers::classify))
        .route("/classify-enhanced", post(handlers::classify_enhanced))
        .route("/classify-batch", post(handlers::classify_batch))
        .route("/categories", get(handlers::categories))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &AppConfig, state: AppState) -> Result<()> {
    let bind_addr = config.bind_addr();
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await.map_err(|e| {
        error!("Failed to bind listener to {}: {}", bind_addr, e);
        AppError::Io(e)
    })?;

    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Internal(format!("server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
