//! Result-card view-model.

use serde::Serialize;

use super::format::{
    format_currency, format_manufacturer, or_fallback, Rarity, NOT_AVAILABLE, UNKNOWN,
    UNKNOWN_ERA,
};
use crate::config::detail_path;
use crate::models::{BallSummary, SearchResponse};

pub const NO_RESULTS_MESSAGE: &str = "No results found. Try adjusting your filters.";

/// Display-ready fields of one result card. Text is unescaped; escaping is
/// the job of the markup adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub record_no: i64,
    pub ball_name: String,
    pub era: String,
    pub pattern: String,
    pub manufacturer: String,
    pub country: String,
    pub value: String,
    pub rarity: Rarity,
    pub rarity_label: &'static str,
    pub rarity_class: &'static str,
    pub detail_path: String,
}

impl CardView {
    pub fn from_summary(ball: &BallSummary) -> Self {
        let rarity = Rarity::from_score(ball.rarity_score);
        Self {
            record_no: ball.record_no,
            ball_name: ball.ball_name.clone(),
            era: or_fallback(ball.era.as_deref(), UNKNOWN_ERA),
            pattern: or_fallback(ball.cover_pattern.as_deref(), NOT_AVAILABLE),
            manufacturer: format_manufacturer(ball.manufacturer.as_deref()),
            country: or_fallback(ball.country.as_deref(), UNKNOWN),
            value: format_currency(ball.value_mid),
            rarity,
            rarity_label: rarity.label(),
            rarity_class: rarity.css_class(),
            detail_path: detail_path(ball.record_no),
        }
    }
}

/// The result list of one search page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub total: u64,
    pub count_label: String,
    pub cards: Vec<CardView>,
    /// Set when the page has no cards.
    pub empty_message: Option<&'static str>,
}

impl ResultsView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Turn a search response into its result view-model.
pub fn render_results(data: &SearchResponse) -> ResultsView {
    let cards: Vec<CardView> = data.results.iter().map(CardView::from_summary).collect();
    let empty_message = if cards.is_empty() {
        Some(NO_RESULTS_MESSAGE)
    } else {
        None
    };
    ResultsView {
        total: data.total,
        count_label: format!("{} results", data.total),
        cards,
        empty_message,
    }
}
