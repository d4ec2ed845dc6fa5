//! Query-string builder for the search endpoint.
//!
//! Parameters are kept in insertion order and encoded as
//! `application/x-www-form-urlencoded` when applied to a URL. Empty text
//! values and missing numbers are skipped, so only active filters are sent.
//!
//! # Example
//!
//! ```rust
//! use ball_catalog_sdk::SearchQuery;
//! let pairs = SearchQuery::new()
//!     .text("q", "urethane")
//!     .number("min_value", Some(50.0))
//!     .page(1, 20)
//!     .build();
//! assert_eq!(pairs[0], ("q".to_string(), "urethane".to_string()));
//! ```

use reqwest::Url;

use crate::filters::SearchFilters;

/// Builds the ordered `key=value` pairs of a search request.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Build the full query for `filters` at `page`.
    ///
    /// Parameter order is `q, era, pattern, country, min_value, max_value,
    /// sort, order, page, per_page`.
    pub fn from_filters(filters: &SearchFilters, page: u32, per_page: u32) -> Self {
        let mut qb = Self::new();
        qb.text("q", &filters.query)
            .text("era", &filters.era)
            .text("pattern", &filters.pattern)
            .text("country", &filters.country)
            .number("min_value", filters.min_value)
            .number("max_value", filters.max_value)
            .text("sort", filters.sort.map(|s| s.as_str()).unwrap_or(""))
            .text("order", filters.order.map(|o| o.as_str()).unwrap_or(""))
            .page(page, per_page);
        qb
    }

    /// Add a text parameter; blank values are skipped.
    pub fn text(&mut self, key: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add a numeric parameter; `None` and non-finite values are skipped.
    ///
    /// Whole numbers are written without a fractional part (`50`, not `50.0`).
    pub fn number(&mut self, key: &str, value: Option<f64>) -> &mut Self {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    /// Add the `page` and `per_page` parameters.
    pub fn page(&mut self, page: u32, per_page: u32) -> &mut Self {
        self.pairs.push(("page".to_string(), page.to_string()));
        self.pairs.push(("per_page".to_string(), per_page.to_string()));
        self
    }

    /// Return the accumulated pairs in insertion order.
    pub fn build(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }

    /// Encode the pairs as a query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut scratch = Url::parse("http://query.invalid/").expect("static URL parses");
        self.apply(&mut scratch);
        scratch.query().unwrap_or("").to_string()
    }

    /// Replace the query of `url` with the encoded pairs.
    pub fn apply(&self, url: &mut Url) {
        url.set_query(None);
        if self.pairs.is_empty() {
            return;
        }
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
    }
}
