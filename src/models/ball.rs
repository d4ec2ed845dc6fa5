use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// BallSummary — One search hit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BallSummary {
    pub record_no: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ball_name: String,
    pub era: Option<String>,
    pub cover_pattern: Option<String>,
    pub manufacturer: Option<String>,
    pub country: Option<String>,
    pub value_mid: Option<f64>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rarity_score: f64,
    #[serde(default)]
    pub ball_name_format: Option<String>,
    #[serde(default)]
    pub era_start: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

// ---------------------------------------------------------------------------
// BallDetail — Full record from the detail endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BallDetail {
    pub record_no: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ball_name: String,
    pub era: Option<String>,
    pub cover_pattern: Option<String>,
    pub manufacturer: Option<String>,
    pub country: Option<String>,
    pub value_mid: Option<f64>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rarity_score: f64,
    /// Every other column of the record.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl BallDetail {
    /// Look up a column not covered by the typed fields.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.extra.get(name)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
