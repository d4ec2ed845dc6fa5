//! Async wrapper around [`CatalogClient`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use ball_catalog_sdk::{AsyncCatalogClient, SearchFilters};
//!
//! # async fn example() -> ball_catalog_sdk::Result<()> {
//! let client = AsyncCatalogClient::builder().build().await?;
//!
//! let page = client
//!     .search(SearchFilters::new().with_era("1970s"), 1)
//!     .await?;
//! println!("{} results", page.total);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::error::{CatalogError, Result};
use crate::filters::SearchFilters;
use crate::models::{BallDetail, SearchResponse};
use crate::{CatalogClient, CatalogClientBuilder, ClientConfig};

// ---------------------------------------------------------------------------
// AsyncCatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCatalogClient`].
#[derive(Default)]
pub struct AsyncCatalogClientBuilder {
    config: Option<ClientConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    per_page: Option<u32>,
}

impl AsyncCatalogClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the catalog server root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the page size sent as `per_page`.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Build the client.
    ///
    /// The blocking HTTP client is created on the blocking thread pool, since
    /// it owns a runtime of its own.
    pub async fn build(self) -> Result<AsyncCatalogClient> {
        tokio::task::spawn_blocking(move || {
            let mut builder = match self.config {
                Some(config) => CatalogClientBuilder::from_config(config),
                None => CatalogClient::builder(),
            };
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(per_page) = self.per_page {
                builder = builder.per_page(per_page);
            }
            let client = builder.build()?;
            Ok(AsyncCatalogClient {
                inner: Arc::new(client),
            })
        })
        .await
        .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCatalogClient
// ---------------------------------------------------------------------------

/// Async wrapper around [`CatalogClient`].
///
/// Concurrent calls are independent; no ordering between their completions
/// is guaranteed.
#[derive(Clone)]
pub struct AsyncCatalogClient {
    inner: Arc<CatalogClient>,
}

impl AsyncCatalogClient {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncCatalogClientBuilder {
        AsyncCatalogClientBuilder::default()
    }

    /// Run a sync client operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CatalogClient) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&client))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch one page of search results.
    pub async fn search(&self, filters: SearchFilters, page: u32) -> Result<SearchResponse> {
        self.run(move |c| c.search(&filters, page)).await
    }

    /// Fetch the full record of one ball.
    pub async fn get_ball(&self, record_no: i64) -> Result<Option<BallDetail>> {
        self.run(move |c| c.get_ball(record_no)).await
    }

    /// Return the configuration of the underlying client.
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Release the HTTP client on the blocking pool.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || drop(self.inner))
            .await
            .map_err(|e| CatalogError::InvalidArgument(format!("Task join error: {e}")))
    }
}
