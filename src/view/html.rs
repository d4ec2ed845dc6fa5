//! HTML rendering of the search view-model.
//!
//! Markup is produced by tera templates registered under `.html` names, so
//! every interpolated value is HTML-escaped. The structure (`.card`,
//! `.card-row`, `.rarity-badge`, pagination `<button>`s) matches the catalog
//! page stylesheet.

use tera::{Context, Tera};

use super::pagination::PageControl;
use super::results::{ResultsView, NO_RESULTS_MESSAGE};
use crate::controller::{Surface, ERROR_MESSAGE};
use crate::error::Result;

pub const LOADING_HTML: &str = r#"<div class="loading"><div class="spinner"></div><p>Loading results...</p></div>"#;

const RESULTS_TEMPLATE: &str = r#"{% if is_empty -%}
<div class="loading"><p>{{ empty_message }}</p></div>
{%- else -%}
{% for card in cards -%}
<div class="card" data-record-no="{{ card.record_no }}" onclick="viewDetail({{ card.record_no }})">
<div class="card-header"><h4>{{ card.ball_name }}</h4><span class="card-era">{{ card.era }}</span></div>
<div class="card-body">
<div class="card-row"><span class="card-label">Pattern</span><span class="card-value">{{ card.pattern }}</span></div>
<div class="card-row"><span class="card-label">Manufacturer</span><span class="card-value">{{ card.manufacturer }}</span></div>
<div class="card-row"><span class="card-label">Country</span><span class="card-value">{{ card.country }}</span></div>
<div class="card-row"><span class="card-label">Estimated Value</span><span class="card-value price">{{ card.value }}</span></div>
</div>
<div class="card-footer"><span class="rarity-badge {{ card.rarity_class }}">{{ card.rarity_label }}</span></div>
</div>
{% endfor -%}
{%- endif %}"#;

const PAGINATION_TEMPLATE: &str = r#"{% for c in controls -%}
{% if c.kind == "previous" -%}
<button onclick="searchBalls({{ c.target }})"{% if c.disabled %} disabled{% endif %}>Previous</button>
{%- elif c.kind == "next" -%}
<button onclick="searchBalls({{ c.target }})"{% if c.disabled %} disabled{% endif %}>Next</button>
{%- elif c.kind == "page" -%}
<button onclick="searchBalls({{ c.number }})"{% if c.active %} class="active"{% endif %}>{{ c.number }}</button>
{%- else -%}
<span>...</span>
{%- endif %}
{%- endfor %}"#;

const MESSAGE_TEMPLATE: &str = r#"<div class="loading"><p>{{ message }}</p></div>"#;

/// Renders view-models to HTML fragments.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        Self::with_templates(RESULTS_TEMPLATE, PAGINATION_TEMPLATE, MESSAGE_TEMPLATE)
    }

    /// Build a renderer from custom markup for the three fragments.
    ///
    /// The templates see the same context as the built-in ones: `is_empty`,
    /// `empty_message` and `cards` for results, `controls` for pagination and
    /// `message` for status messages.
    pub fn with_templates(results: &str, pagination: &str, message: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("results.html", results),
            ("pagination.html", pagination),
            ("message.html", message),
        ])?;
        Ok(Self { tera })
    }

    /// Card list, or the "no results" message for an empty page.
    pub fn render_results(&self, view: &ResultsView) -> Result<String> {
        let mut context = Context::new();
        context.insert("is_empty", &view.is_empty());
        context.insert("empty_message", view.empty_message.unwrap_or(NO_RESULTS_MESSAGE));
        context.insert("cards", &view.cards);
        Ok(self.tera.render("results.html", &context)?)
    }

    /// Pagination buttons; empty when there are no controls.
    pub fn render_pagination(&self, controls: &[PageControl]) -> Result<String> {
        if controls.is_empty() {
            return Ok(String::new());
        }
        let mut context = Context::new();
        context.insert("controls", controls);
        Ok(self.tera.render("pagination.html", &context)?)
    }

    /// A single status message in the results container.
    pub fn render_message(&self, message: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("message", message);
        Ok(self.tera.render("message.html", &context)?)
    }
}

// ---------------------------------------------------------------------------
// HtmlSurface
// ---------------------------------------------------------------------------

/// In-memory page with the three containers the catalog page updates.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    renderer: HtmlRenderer,
    pub results_html: String,
    pub pagination_html: String,
    pub count_label: String,
    /// Last navigation target, if any.
    pub location: Option<String>,
}

impl HtmlSurface {
    pub fn new() -> Result<Self> {
        Ok(Self::with_renderer(HtmlRenderer::new()?))
    }

    pub fn with_renderer(renderer: HtmlRenderer) -> Self {
        Self {
            renderer,
            results_html: String::new(),
            pagination_html: String::new(),
            count_label: String::new(),
            location: None,
        }
    }

    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }
}

impl Surface for HtmlSurface {
    fn show_loading(&mut self) {
        self.results_html = LOADING_HTML.to_string();
    }

    fn show_results(&mut self, results: &ResultsView, pagination: &[PageControl]) {
        let rendered = self
            .renderer
            .render_results(results)
            .and_then(|html| Ok((html, self.renderer.render_pagination(pagination)?)));
        match rendered {
            Ok((results_html, pagination_html)) => {
                self.count_label = results.count_label.clone();
                self.results_html = results_html;
                self.pagination_html = pagination_html;
            }
            Err(e) => {
                log::error!("Failed to render search results: {}", e);
                self.count_label = String::new();
                self.pagination_html = String::new();
                self.show_error(ERROR_MESSAGE);
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        self.results_html = self
            .renderer
            .render_message(message)
            .unwrap_or_else(|e| {
                log::error!("Failed to render error message: {}", e);
                String::new()
            });
    }

    fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_string());
    }
}
