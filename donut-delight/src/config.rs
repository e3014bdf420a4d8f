//! Application configuration
//!
//! Loaded from environment variables (after `.env`), then overridden by
//! command-line flags.

use crate::cli::CommandLine;
use donut_client::{ClientConfig, RetryPolicy};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog host base URL
    pub base_url: String,
    /// Catalog path under `base_url`
    pub catalog_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries after the first failed catalog request
    pub max_retries: u32,
    /// Directory holding the current session
    pub session_dir: PathBuf,
    /// Log level or filter directive
    pub log_level: String,
    /// JSON log lines
    pub log_json: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = ClientConfig::default();
        Self {
            base_url: std::env::var("DONUT_BASE_URL").unwrap_or(defaults.base_url),
            catalog_path: std::env::var("DONUT_CATALOG_PATH").unwrap_or(defaults.catalog_path),
            timeout_secs: std::env::var("DONUT_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            max_retries: std::env::var("DONUT_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry.max_retries),
            session_dir: std::env::var("DONUT_SESSION_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_dir()),
            log_level: std::env::var("DONUT_LOG_LEVEL").unwrap_or_else(|_| "warn".into()),
            log_json: std::env::var("DONUT_LOG_JSON")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, cli: &CommandLine) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(session_dir) = &cli.session_dir {
            self.session_dir = session_dir.clone();
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = log_level.clone();
        }
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::default().with_max_retries(self.max_retries)
    }

    /// Client configuration for the catalog loader
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
            .with_catalog_path(self.catalog_path.clone())
            .with_timeout(self.timeout_secs)
            .with_retry(self.retry_policy())
    }
}

fn default_session_dir() -> PathBuf {
    std::env::temp_dir().join("donut-delight").join("session")
}
