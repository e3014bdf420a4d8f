//! Client configuration

use crate::retry::RetryPolicy;
use crate::{ClientResult, HttpClient};

/// Default catalog path relative to the base URL
pub const DEFAULT_CATALOG_PATH: &str = "donuts.json";

/// Client configuration for connecting to the catalog host
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host base URL (e.g., "http://localhost:5173")
    pub base_url: String,

    /// Catalog path under `base_url`
    pub catalog_path: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Retry policy applied by callers of the loader
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            timeout: 30,
            retry: RetryPolicy::default(),
        }
    }

    /// Set the catalog path
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5173")
    }
}
