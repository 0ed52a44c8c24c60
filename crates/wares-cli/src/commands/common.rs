use std::env;

use serde::Serialize;
use wares_core::models::SearchHit;
use wares_core::search::normalize_base_url;
use wares_core::util::normalize_text_option;
use wares_core::SearchClient;

use crate::error::CliError;

/// Default endpoint when neither --base-url nor WARES_SEARCH_URL is set.
pub const DEFAULT_SEARCH_BASE_URL: &str = "http://localhost:8000";

/// JSON output row for a search hit.
#[derive(Debug, Serialize)]
pub struct HitListItem {
    pub name: String,
}

/// Trim a search query and reject empty input.
pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let normalized = query.trim();
    if normalized.is_empty() {
        return Err(CliError::EmptySearchQuery);
    }
    Ok(normalized.to_string())
}

/// Resolve the endpoint base URL: explicit flag, then environment, then default.
pub fn resolve_base_url(flag: Option<String>) -> Result<String, CliError> {
    resolve_base_url_from(flag, env::var("WARES_SEARCH_URL").ok())
}

/// Resolution logic with the environment value passed in explicitly.
pub fn resolve_base_url_from(
    flag: Option<String>,
    env_value: Option<String>,
) -> Result<String, CliError> {
    let candidate = normalize_text_option(flag)
        .or_else(|| normalize_text_option(env_value))
        .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string());
    normalize_base_url(&candidate).map_err(|error| CliError::Config(error.to_string()))
}

/// Run one search against the endpoint.
pub async fn search_catalog(query: &str, base_url: &str) -> Result<Vec<SearchHit>, CliError> {
    tracing::debug!("searching {base_url} for {query:?}");
    let client = SearchClient::new(base_url)?;
    Ok(client.search(query).await?)
}

/// Convert a hit into its JSON output row.
pub fn hit_to_list_item(hit: &SearchHit) -> HitListItem {
    HitListItem {
        name: hit.name().to_string(),
    }
}
