//! Donut Client - catalog client for the Donut Delight data source
//!
//! Provides the HTTP transport, the retry policy applied by callers, and the
//! `CatalogLoader` state machine (`Idle | Loading | Success | Error`).

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod retry;

pub use catalog::{CatalogLoader, CatalogSource, HttpCatalogSource, LoadState};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, LoadError};
pub use http::HttpClient;
pub use retry::RetryPolicy;

// Re-export shared types for convenience
pub use shared::models::Item;
