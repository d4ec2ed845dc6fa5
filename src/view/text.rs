//! Plain-text rendering for terminals.

use super::pagination::PageControl;
use super::results::{CardView, ResultsView};
use crate::controller::Surface;

/// Format one card as an indented block.
pub fn card_to_text(card: &CardView) -> String {
    format!(
        "#{} {} [{}]\n  Pattern:         {}\n  Manufacturer:    {}\n  Country:         {}\n  Estimated Value: {}\n  Rarity:          {}\n",
        card.record_no,
        card.ball_name,
        card.era,
        card.pattern,
        card.manufacturer,
        card.country,
        card.value,
        card.rarity_label,
    )
}

/// Format the pagination bar on one line, e.g. `< 1 ... 4 [5] 6 ... 9 >`.
///
/// Disabled previous/next arrows are omitted.
pub fn pagination_to_text(controls: &[PageControl]) -> String {
    controls
        .iter()
        .filter_map(|c| match *c {
            PageControl::Previous { disabled, .. } => (!disabled).then(|| "<".to_string()),
            PageControl::Next { disabled, .. } => (!disabled).then(|| ">".to_string()),
            PageControl::Page { number, active: true } => Some(format!("[{number}]")),
            PageControl::Page { number, .. } => Some(number.to_string()),
            PageControl::Ellipsis => Some("...".to_string()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Accumulates a text transcript of everything shown.
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    pub output: String,
    pub location: Option<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the transcript, leaving the surface empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Surface for TextSurface {
    fn show_loading(&mut self) {}

    fn show_results(&mut self, results: &ResultsView, pagination: &[PageControl]) {
        self.output.push_str(&results.count_label);
        self.output.push('\n');
        if let Some(message) = results.empty_message {
            self.output.push_str(message);
            self.output.push('\n');
        }
        for card in &results.cards {
            self.output.push('\n');
            self.output.push_str(&card_to_text(card));
        }
        if !pagination.is_empty() {
            self.output.push('\n');
            self.output.push_str(&pagination_to_text(pagination));
            self.output.push('\n');
        }
    }

    fn show_error(&mut self, message: &str) {
        self.output.push_str(message);
        self.output.push('\n');
    }

    fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_string());
    }
}
