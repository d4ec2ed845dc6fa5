//! Ball catalog SDK for Rust.
//!
//! Provides a client for the collectible ball catalog search API together
//! with the view-models the catalog page renders: result cards with rarity
//! badges and formatted values, and a windowed pagination bar.
//!
//! # Quick start
//!
//! ```no_run
//! use ball_catalog_sdk::{CatalogClient, SearchFilters};
//!
//! let client = CatalogClient::builder()
//!     .base_url("http://localhost:8085")
//!     .build()
//!     .unwrap();
//!
//! let filters = SearchFilters::new().with_query("urethane").with_min_value(50.0);
//! let page = client.search(&filters, 1).unwrap();
//! println!("{} results over {} pages", page.total, page.pages);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod models;
pub mod query;
pub mod transport;
pub mod view;

#[cfg(feature = "async")]
pub use async_client::AsyncCatalogClient;
pub use config::ClientConfig;
pub use controller::{SearchController, SearchState, SearchView, Surface};
pub use error::{CatalogError, Result};
pub use filters::{SearchFilters, SortField, SortOrder};
pub use models::{BallDetail, BallSummary, SearchResponse};
pub use query::SearchQuery;
pub use transport::{HttpResponse, HttpTransport, Transport};

use std::fmt;
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

// ---------------------------------------------------------------------------
// CatalogClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CatalogClient`].
///
/// Use [`CatalogClient::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogClientBuilder::build).
#[derive(Default)]
pub struct CatalogClientBuilder {
    config: ClientConfig,
    base_url: Option<String>,
}

impl CatalogClientBuilder {
    /// Start from an existing configuration (e.g. [`ClientConfig::from_env`]).
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            base_url: None,
        }
    }

    /// Set the catalog server root, e.g. `https://catalog.example.com`.
    ///
    /// Defaults to `http://localhost:8085`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the page size sent as `per_page`.
    ///
    /// Defaults to 20.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.config.per_page = per_page;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Validate the configuration and build the client with an HTTP transport.
    pub fn build(self) -> Result<CatalogClient> {
        let config = self.into_config()?;
        let transport = HttpTransport::new(config.timeout, &config.user_agent)?;
        Ok(CatalogClient { config, transport })
    }

    /// Validate the configuration and build the client around `transport`.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<CatalogClient<T>> {
        let config = self.into_config()?;
        Ok(CatalogClient { config, transport })
    }

    fn into_config(self) -> Result<ClientConfig> {
        let mut config = self.config;
        if let Some(raw) = self.base_url {
            config.base_url = config::parse_base_url(&raw)?;
        }
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// Client for the catalog search API.
///
/// Generic over its [`Transport`]; the default is the blocking
/// [`HttpTransport`].
pub struct CatalogClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl CatalogClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Wrap a custom transport with an already-validated configuration.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The exact URL requested by [`search`](Self::search).
    pub fn search_url(&self, filters: &SearchFilters, page: u32) -> Result<Url> {
        if page == 0 {
            return Err(CatalogError::InvalidArgument(
                "page numbers start at 1".to_string(),
            ));
        }
        let mut url = self.config.endpoint(config::SEARCH_PATH);
        SearchQuery::from_filters(filters, page, self.config.per_page).apply(&mut url);
        Ok(url)
    }

    /// Fetch one page of search results.
    pub fn search(&self, filters: &SearchFilters, page: u32) -> Result<SearchResponse> {
        let url = self.search_url(filters, page)?;
        let resp = self.transport.get(&url)?;
        if !resp.is_success() {
            return Err(CatalogError::Status(resp.status));
        }
        decode(&resp.body)
    }

    /// Fetch the full record of one ball, or `None` if the server has no
    /// such record.
    pub fn get_ball(&self, record_no: i64) -> Result<Option<BallDetail>> {
        let url = self
            .config
            .endpoint(&format!("{}/{}", config::BALL_API_PATH, record_no));
        let resp = self.transport.get(&url)?;
        match resp.status {
            404 => Ok(None),
            _ if resp.is_success() => decode(&resp.body).map(Some),
            status => Err(CatalogError::Status(status)),
        }
    }

    /// Absolute URL of the detail page of `record_no`.
    pub fn detail_url(&self, record_no: i64) -> Url {
        self.config.endpoint(&config::detail_path(record_no))
    }
}

fn decode<D: DeserializeOwned>(body: &str) -> Result<D> {
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl<T: Transport> fmt::Display for CatalogClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogClient(base_url={}, per_page={}, timeout={}s)",
            self.config.base_url,
            self.config.per_page,
            self.config.timeout.as_secs()
        )
    }
}
