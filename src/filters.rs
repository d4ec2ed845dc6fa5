//! Search filter state and sort options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ---------------------------------------------------------------------------
// SortField / SortOrder
// ---------------------------------------------------------------------------

/// Columns the search endpoint accepts for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ValueMid,
    BallName,
    EraStart,
    RecordNo,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::ValueMid => "value_mid",
            SortField::BallName => "ball_name",
            SortField::EraStart => "era_start",
            SortField::RecordNo => "record_no",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "value_mid" => Ok(SortField::ValueMid),
            "ball_name" => Ok(SortField::BallName),
            "era_start" => Ok(SortField::EraStart),
            "record_no" => Ok(SortField::RecordNo),
            other => Err(CatalogError::InvalidArgument(format!(
                "unknown sort field '{other}' (expected value_mid, ball_name, era_start or record_no)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortOrder::Asc),
            "DESC" => Ok(SortOrder::Desc),
            _ => Err(CatalogError::InvalidArgument(format!(
                "unknown sort order '{s}' (expected asc or desc)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchFilters
// ---------------------------------------------------------------------------

/// The filter form of a catalog search.
///
/// String fields are free text; an empty (or whitespace-only) string means
/// the filter is not applied. `None` numeric bounds are likewise skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: String,
    pub era: String,
    pub pattern: String,
    pub country: String,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl SearchFilters {
    /// Filters matching every record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_era(mut self, era: impl Into<String>) -> Self {
        self.era = era.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_min_value(mut self, value: f64) -> Self {
        self.min_value = Some(value);
        self
    }

    pub fn with_max_value(mut self, value: f64) -> Self {
        self.max_value = Some(value);
        self
    }

    pub fn with_sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some(field);
        self.order = Some(order);
        self
    }

    /// Clear every filter back to its empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no filter would be sent to the backend.
    pub fn is_empty(&self) -> bool {
        [&self.query, &self.era, &self.pattern, &self.country]
            .iter()
            .all(|s| s.trim().is_empty())
            && self.min_value.is_none()
            && self.max_value.is_none()
            && self.sort.is_none()
            && self.order.is_none()
    }
}
