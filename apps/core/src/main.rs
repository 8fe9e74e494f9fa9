// Ticket Classifier Entry Point
// Loads the division dictionary once, then serves it over HTTP.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use ticket_classifier::classifier::ClassificationEngine;
use ticket_classifier::config::AppConfig;
use ticket_classifier::logging;
use ticket_classifier::server::{self, AppState, RequestLimits};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment still applies.
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    logging::init(config.log_format, env!("CARGO_PKG_NAME"))?;

    info!("Starting NLP Classifier Service (keyword-based)");

    let dictionary = config
        .load_dictionary()
        .context("Classifier is misconfigured, refusing to start")?;
    let engine = ClassificationEngine::with_options(dictionary, config.engine_options());

    let names: Vec<&str> = engine
        .dictionary()
        .categories()
        .iter()
        .map(|c| c.name().as_str())
        .collect();
    info!(
        categories = ?names,
        fallback = %engine.dictionary().fallback(),
        min_partial_len = engine.options().min_partial_len,
        "Classifier initialized"
    );

    let state = AppState::new(Arc::new(engine), RequestLimits::from(&config));
    server::serve(&config, state).await?;
    Ok(())
}
