use serde::{Deserialize, Serialize};

use super::ball::BallSummary;

// ---------------------------------------------------------------------------
// SearchResponse — Body of `/api/search`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<BallSummary>,
    pub total: u64,
    pub pages: u32,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

impl SearchResponse {
    /// True when the page carries no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
