//! HTML adapter: escaping, card markup, pagination buttons, status messages.

mod common;

use ball_catalog_sdk::view::html::LOADING_HTML;
use ball_catalog_sdk::view::{
    render_pagination, render_results, HtmlRenderer, HtmlSurface, PaginationState,
};
use ball_catalog_sdk::{SearchResponse, Surface};

fn response(json: &str) -> SearchResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn empty_page_renders_no_results_message() {
    let renderer = HtmlRenderer::new().unwrap();
    let html = renderer
        .render_results(&render_results(&response(&common::empty_page_json())))
        .unwrap();
    assert!(html.contains("No results found. Try adjusting your filters."));
    assert!(html.contains(r#"<div class="loading">"#));
    assert!(!html.contains(r#"class="card""#));
}

#[test]
fn cards_render_one_block_per_result() {
    let renderer = HtmlRenderer::new().unwrap();
    let html = renderer
        .render_results(&render_results(&response(&common::page_json(2, 2, 1))))
        .unwrap();
    assert_eq!(html.matches(r#"<div class="card" "#).count(), 2);
    assert!(html.contains("viewDetail(1)"));
    assert!(html.contains("viewDetail(2)"));
    assert!(html.contains("<h4>Ball 1</h4>"));
    assert!(html.contains(r#"<span class="card-value price">$125</span>"#));
    assert!(html.contains(r#"<span class="rarity-badge rarity-rare">Rare</span>"#));
}

#[test]
fn text_fields_are_escaped() {
    let json = serde_json::json!({
        "results": [common::sparse_ball_json()],
        "total": 1,
        "pages": 1
    })
    .to_string();
    let renderer = HtmlRenderer::new().unwrap();
    let html = renderer
        .render_results(&render_results(&response(&json)))
        .unwrap();
    assert!(html.contains("Mystery &lt;Ball&gt; &amp; Co"));
    assert!(!html.contains("<Ball>"));
    assert!(html.contains("Unknown era"));
}

#[test]
fn pagination_marks_active_and_disabled_buttons() {
    let renderer = HtmlRenderer::new().unwrap();
    let html = renderer
        .render_pagination(&render_pagination(&PaginationState::new(1, 8)))
        .unwrap();
    assert!(html.contains(r#"<button onclick="searchBalls(1)" disabled>Previous</button>"#));
    assert!(html.contains(r#"<button onclick="searchBalls(1)" class="active">1</button>"#));
    assert!(html.contains(r#"<button onclick="searchBalls(2)">2</button>"#));
    assert!(html.contains("<span>...</span>"));
    assert!(html.contains(r#"<button onclick="searchBalls(8)">8</button>"#));
    assert!(html.contains(r#"<button onclick="searchBalls(2)">Next</button>"#));
}

#[test]
fn no_controls_render_empty_pagination() {
    let renderer = HtmlRenderer::new().unwrap();
    assert_eq!(renderer.render_pagination(&[]).unwrap(), "");
}

#[test]
fn surface_tracks_containers() {
    let mut surface = HtmlSurface::new().unwrap();

    surface.show_loading();
    assert_eq!(surface.results_html, LOADING_HTML);

    let data = response(&common::page_json(1, 30, 2));
    let results = render_results(&data);
    let controls = render_pagination(&PaginationState::new(1, data.pages));
    surface.show_results(&results, &controls);
    assert_eq!(surface.count_label, "30 results");
    assert!(surface.results_html.contains("Ball 1"));
    assert!(surface.pagination_html.contains("Next"));

    surface.show_error("Error loading results. Please try again.");
    assert!(surface
        .results_html
        .contains("<p>Error loading results. Please try again.</p>"));
    // The count label and pagination are left as they were.
    assert_eq!(surface.count_label, "30 results");
    assert!(surface.pagination_html.contains("Next"));

    surface.navigate("/ball/1");
    assert_eq!(surface.location.as_deref(), Some("/ball/1"));
}

#[test]
fn render_failure_shows_error_without_count() {
    let renderer = HtmlRenderer::with_templates(
        "{{ missing_variable }}",
        "{{ controls | length }}",
        r#"<p class="error">{{ message }}</p>"#,
    )
    .unwrap();
    let mut surface = HtmlSurface::with_renderer(renderer);

    let data = response(&common::page_json(1, 30, 2));
    let results = render_results(&data);
    let controls = render_pagination(&PaginationState::new(1, data.pages));
    surface.show_results(&results, &controls);

    assert_eq!(surface.count_label, "");
    assert_eq!(surface.pagination_html, "");
    assert_eq!(
        surface.results_html,
        r#"<p class="error">Error loading results. Please try again.</p>"#
    );
}

#[test]
fn custom_templates_receive_the_view_model() {
    let renderer = HtmlRenderer::with_templates(
        "{% for card in cards %}[{{ card.ball_name }}]{% endfor %}",
        "{{ controls | length }}",
        "{{ message }}",
    )
    .unwrap();
    let results = render_results(&response(&common::page_json(2, 2, 1)));
    assert_eq!(renderer.render_results(&results).unwrap(), "[Ball 1][Ball 2]");
    assert_eq!(renderer.render_message("a < b").unwrap(), "a &lt; b");
}
