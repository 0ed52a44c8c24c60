use pretty_assertions::assert_eq;

use crate::commands::common::{
    hit_to_list_item, normalize_search_query, resolve_base_url_from, DEFAULT_SEARCH_BASE_URL,
};
use crate::error::CliError;

#[test]
fn normalize_search_query_trims_whitespace() {
    assert_eq!(
        normalize_search_query("  blue widget  ").unwrap(),
        "blue widget".to_string()
    );
}

#[test]
fn normalize_search_query_rejects_empty() {
    assert!(matches!(
        normalize_search_query(" \n\t "),
        Err(CliError::EmptySearchQuery)
    ));
}

#[test]
fn resolve_base_url_prefers_explicit_flag() {
    let resolved = resolve_base_url_from(
        Some("https://catalog.example.com".to_string()),
        Some("https://ignored.example.com".to_string()),
    )
    .unwrap();
    assert_eq!(resolved, "https://catalog.example.com");
}

#[test]
fn resolve_base_url_falls_back_to_environment() {
    let resolved =
        resolve_base_url_from(None, Some("https://env.example.com/".to_string())).unwrap();
    assert_eq!(resolved, "https://env.example.com");
}

#[test]
fn resolve_base_url_defaults_when_unconfigured() {
    let resolved = resolve_base_url_from(None, None).unwrap();
    assert_eq!(resolved, DEFAULT_SEARCH_BASE_URL);
}

#[test]
fn resolve_base_url_requires_http_scheme() {
    assert!(matches!(
        resolve_base_url_from(Some("catalog.example.com".to_string()), None),
        Err(CliError::Config(_))
    ));
}

#[test]
fn hit_to_list_item_carries_the_name() {
    let hit: wares_core::SearchHit =
        serde_json::from_str(r#"{"_source":{"name":"Widget"}}"#).unwrap();
    assert_eq!(hit_to_list_item(&hit).name, "Widget");
}
