//! Tracing subscriber setup.
//!
//! `RUST_LOG` controls filtering (default `info`). The JSON format uses the
//! Bunyan layout so log shippers can parse request and classification fields.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::{AppError, Result};

const DEFAULT_FILTER: &str = "info,tower_http=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(format: LogFormat, service_name: &str) -> Result<()> {
    let registry = Registry::default().with(env_filter());

    match format {
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(service_name.to_string(), std::io::stdout))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(false)).try_init(),
    }
    .map_err(|e| AppError::Internal(format!("failed to install tracing subscriber: {}", e)))
}
