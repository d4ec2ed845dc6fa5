//! Client configuration: endpoint constants, defaults and environment overrides.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::{CatalogError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8085";
pub const SEARCH_PATH: &str = "/api/search";
pub const BALL_API_PATH: &str = "/api/ball";
pub const DETAIL_ROUTE: &str = "/ball";

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "BALL_CATALOG_URL";
pub const ENV_TIMEOUT_SECS: &str = "BALL_CATALOG_TIMEOUT_SECS";
pub const ENV_PER_PAGE: &str = "BALL_CATALOG_PER_PAGE";

/// Resolved settings for a [`CatalogClient`](crate::CatalogClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub per_page: u32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: DEFAULT_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Build a config from the defaults, overridden by any `BALL_CATALOG_*`
    /// environment variables that are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BASE_URL) {
            config.base_url = parse_base_url(&raw)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!("{ENV_TIMEOUT_SECS} must be whole seconds, got '{raw}'"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(ENV_PER_PAGE) {
            let per_page: u32 = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!("{ENV_PER_PAGE} must be a positive integer, got '{raw}'"))
            })?;
            config.per_page = per_page;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the search endpoint cannot serve.
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(CatalogError::Config("per_page must be at least 1".to_string()));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(CatalogError::Config(format!(
                "base URL '{}' cannot carry a path",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Join an absolute endpoint path onto the base URL, keeping any path
    /// prefix the base URL already has.
    pub fn endpoint(&self, path: &str) -> Url {
        let prefix = self.base_url.path().trim_end_matches('/');
        let mut url = self.base_url.clone();
        url.set_path(&format!("{prefix}{path}"));
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}

/// Parse and sanity-check a base URL string.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| CatalogError::Config(format!("invalid base URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Config(format!(
            "unsupported URL scheme '{other}' in '{raw}'"
        ))),
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Detail-view route for a catalog record.
pub fn detail_path(record_no: i64) -> String {
    format!("{DETAIL_ROUTE}/{record_no}")
}
