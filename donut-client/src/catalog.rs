//! Catalog loading
//!
//! `CatalogSource` is the seam to the data source; `CatalogLoader` wraps a
//! source and exposes the load lifecycle to the rendering layer.

use crate::{ClientConfig, ClientError, ClientResult, HttpClient, LoadError, RetryPolicy};
use async_trait::async_trait;
use shared::models::Item;
use std::collections::HashSet;

/// Read-only source of the item catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Perform exactly one request for the catalog
    async fn fetch(&self) -> ClientResult<Vec<Item>>;
}

/// Catalog served as a static JSON array over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: HttpClient,
    path: String,
}

impl HttpCatalogSource {
    pub fn new(client: HttpClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?, config.catalog_path.clone()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> ClientResult<Vec<Item>> {
        let items: Vec<Item> = self.client.get(&self.path).await?;
        validate_catalog(&items)?;
        Ok(items)
    }
}

/// Reject catalogs with duplicate ids or prices that are negative or non-finite
pub fn validate_catalog(items: &[Item]) -> ClientResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(ClientError::InvalidResponse(format!(
                "duplicate item id {}",
                item.id
            )));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(ClientError::InvalidResponse(format!(
                "invalid price {} for item {}",
                item.price, item.id
            )));
        }
    }
    Ok(())
}

/// Load lifecycle of one catalog request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Item>),
    Error,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadState::Error)
    }

    /// Items of a successful load
    pub fn items(&self) -> Option<&[Item]> {
        match self {
            LoadState::Success(items) => Some(items),
            _ => None,
        }
    }
}

/// Drives a `CatalogSource` and records the resulting `LoadState`
///
/// Leaving `Error` requires an explicit new `load` call.
pub struct CatalogLoader<S: CatalogSource> {
    source: S,
    state: LoadState,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// One request, no retry
    pub async fn load(&mut self) -> Result<&[Item], LoadError> {
        self.load_with_retry(&RetryPolicy::none()).await
    }

    /// Request the catalog, retrying per `policy`; the state stays `Loading`
    /// across retries
    pub async fn load_with_retry(&mut self, policy: &RetryPolicy) -> Result<&[Item], LoadError> {
        self.state = LoadState::Loading;
        let source = &self.source;
        match policy.run(|| source.fetch()).await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Catalog loaded");
                self.state = LoadState::Success(items);
                Ok(self.state.items().unwrap_or_default())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                self.state = LoadState::Error;
                Err(LoadError)
            }
        }
    }
}
