//! Request construction: parameter order, skipping and encoding.

mod common;

use ball_catalog_sdk::{SearchFilters, SearchQuery, SortField, SortOrder};

fn search_path(filters: &SearchFilters, page: u32) -> String {
    let client = common::stub_client(common::StubTransport::new());
    let url = client.search_url(filters, page).unwrap();
    format!("{}?{}", url.path(), url.query().unwrap_or(""))
}

// ---------------------------------------------------------------------------
// search_url
// ---------------------------------------------------------------------------

#[test]
fn query_and_min_value_match_documented_example() {
    let filters = SearchFilters::new().with_query("urethane").with_min_value(50.0);
    assert_eq!(
        search_path(&filters, 1),
        "/api/search?q=urethane&min_value=50&page=1&per_page=20"
    );
}

#[test]
fn empty_filters_send_only_paging() {
    assert_eq!(
        search_path(&SearchFilters::new(), 3),
        "/api/search?page=3&per_page=20"
    );
}

#[test]
fn all_filters_keep_fixed_order() {
    let filters = SearchFilters::new()
        .with_query("pin")
        .with_era("1970s")
        .with_pattern("Swirl")
        .with_country("USA")
        .with_min_value(10.0)
        .with_max_value(99.5)
        .with_sort(SortField::BallName, SortOrder::Asc);
    assert_eq!(
        search_path(&filters, 2),
        "/api/search?q=pin&era=1970s&pattern=Swirl&country=USA&min_value=10&max_value=99.5&sort=ball_name&order=ASC&page=2&per_page=20"
    );
}

#[test]
fn blank_text_filters_are_skipped() {
    let filters = SearchFilters::new().with_query("   ").with_era("");
    assert_eq!(search_path(&filters, 1), "/api/search?page=1&per_page=20");
}

#[test]
fn text_values_are_form_encoded() {
    let filters = SearchFilters::new().with_query("red & blue");
    assert_eq!(
        search_path(&filters, 1),
        "/api/search?q=red+%26+blue&page=1&per_page=20"
    );
}

#[test]
fn page_zero_is_rejected() {
    let client = common::stub_client(common::StubTransport::new());
    assert!(client.search_url(&SearchFilters::new(), 0).is_err());
}

#[test]
fn base_url_path_prefix_is_kept() {
    let client = ball_catalog_sdk::CatalogClient::builder()
        .base_url("https://example.com/catalog/")
        .per_page(50)
        .build_with_transport(common::StubTransport::new())
        .unwrap();
    let url = client.search_url(&SearchFilters::new(), 1).unwrap();
    assert_eq!(
        url.as_str(),
        "https://example.com/catalog/api/search?page=1&per_page=50"
    );
}

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

#[test]
fn number_skips_none_and_non_finite() {
    let pairs = SearchQuery::new()
        .number("min_value", None)
        .number("max_value", Some(f64::NAN))
        .number("x", Some(2.25))
        .build();
    assert_eq!(pairs, vec![("x".to_string(), "2.25".to_string())]);
}

#[test]
fn to_query_string_encodes_pairs() {
    let qs = SearchQuery::new().text("q", "a b").page(1, 20).to_query_string();
    assert_eq!(qs, "q=a+b&page=1&per_page=20");
}

#[test]
fn sort_values_parse_from_cli_strings() {
    assert_eq!("era_start".parse::<SortField>().unwrap(), SortField::EraStart);
    assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    assert!("price".parse::<SortField>().is_err());
    assert!("sideways".parse::<SortOrder>().is_err());
}

#[test]
fn filters_clear_and_is_empty() {
    let mut filters = SearchFilters::new().with_country("UK").with_max_value(5.0);
    assert!(!filters.is_empty());
    filters.clear();
    assert!(filters.is_empty());
    assert_eq!(filters, SearchFilters::default());
}
