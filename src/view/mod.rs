//! View-models for the search page and their rendering adapters.
//!
//! [`render_results`] and [`render_pagination`] are pure functions of the
//! response and pagination state. The [`html`] and [`text`] modules turn the
//! resulting structures into markup for a particular target.

pub mod format;
pub mod html;
pub mod pagination;
pub mod results;
pub mod text;

pub use format::{format_currency, format_manufacturer, Rarity};
pub use html::{HtmlRenderer, HtmlSurface};
pub use pagination::{render_pagination, PageControl, PaginationState};
pub use results::{render_results, CardView, ResultsView, NO_RESULTS_MESSAGE};
pub use text::TextSurface;
