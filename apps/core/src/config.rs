//! Service configuration.
//!
//! Read from `CLASSIFIER_*` environment variables (a `.env` file is loaded
//! first by `main`) and checked with `validator` before anything starts.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;
use validator::Validate;

use crate::classifier::{default_divisions, CategoryDictionary, DictionarySpec, EngineOptions};
use crate::error::{AppError, Result};

pub const ENV_HOST: &str = "CLASSIFIER_HOST";
pub const ENV_PORT: &str = "CLASSIFIER_PORT";
pub const ENV_DICTIONARY: &str = "CLASSIFIER_DICTIONARY";
pub const ENV_SUGGESTIONS: &str = "CLASSIFIER_SUGGESTIONS";
pub const ENV_MIN_PARTIAL_LEN: &str = "CLASSIFIER_MIN_PARTIAL_LEN";
pub const ENV_MAX_TEXT_LEN: &str = "CLASSIFIER_MAX_TEXT_LEN";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for terminals.
    #[default]
    Pretty,
    /// Bunyan-style JSON lines.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("unknown log format: {}", other))),
        }
    }
}

/// Runtime configuration of the classifier service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub host: IpAddr,
    /// Port the HTTP server binds to.
    #[validate(range(min = 1))]
    pub port: u16,
    /// Optional JSON dictionary replacing the built-in divisions.
    pub dictionary_path: Option<PathBuf>,
    /// Default number of suggestions returned by the enhanced endpoint.
    #[validate(range(min = 1, max = 20))]
    pub suggestion_limit: usize,
    /// Minimum keyword length for substring matches.
    #[validate(range(min = 1, max = 32))]
    pub min_partial_len: usize,
    /// Maximum characters accepted per ticket text.
    #[validate(range(min = 1))]
    pub max_text_len: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            dictionary_path: None,
            suggestion_limit: 3,
            min_partial_len: crate::classifier::scoring::DEFAULT_MIN_PARTIAL_LEN,
            max_text_len: 10_000,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            host: parse_var(ENV_HOST)?.unwrap_or(defaults.host),
            port: parse_var(ENV_PORT)?.unwrap_or(defaults.port),
            dictionary_path: read_var(ENV_DICTIONARY).map(PathBuf::from),
            suggestion_limit: parse_var(ENV_SUGGESTIONS)?.unwrap_or(defaults.suggestion_limit),
            min_partial_len: parse_var(ENV_MIN_PARTIAL_LEN)?.unwrap_or(defaults.min_partial_len),
            max_text_len: parse_var(ENV_MAX_TEXT_LEN)?.unwrap_or(defaults.max_text_len),
            log_format: parse_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
        };
        config
            .validate()
            .map_err(|e| AppError::Config(format!("invalid configuration: {}", e)))?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            min_partial_len: self.min_partial_len,
        }
    }

    /// Load the configured dictionary, or the built-in divisions when no path is set.
    pub fn load_dictionary(&self) -> Result<CategoryDictionary> {
        match &self.dictionary_path {
            Some(path) => load_dictionary_file(path),
            None => Ok(default_divisions()?),
        }
    }
}

/// Read and validate a JSON dictionary file.
pub fn load_dictionary_file(path: &Path) -> Result<CategoryDictionary> {
    let raw = fs::read_to_string(path)?;
    let spec: DictionarySpec = serde_json::from_str(&raw).map_err(|e| {
        AppError::Config(format!("cannot parse dictionary {}: {}", path.display(), e))
    })?;
    let dictionary = CategoryDictionary::try_from(spec)?;
    info!(path = %path.display(), categories = dictionary.len(), "Loaded dictionary file");
    Ok(dictionary)
}

fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    read_var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e)))
        })
        .transpose()
}
