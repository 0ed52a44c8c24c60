//! Search endpoint client
//!
//! Platform-agnostic HTTP client for the external search service. One
//! request per call: no retry, no timeout tuning, no caching. The endpoint
//! contract is `GET <base>/search?query=<encoded>` answering
//! `{"results": [hit, ...]}`.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::SearchHit;
use crate::util::{compact_text, is_http_url};

/// Response envelope of the search endpoint.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

/// HTTP client for keyword searches against the catalog endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    base_url: String,
    client: reqwest::Client,
}

impl SearchClient {
    /// Builds a client for an explicit endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs one keyword search and returns the matched hits.
    ///
    /// The query is sent verbatim apart from percent-encoding. A non-2xx
    /// answer becomes [`Error::Status`]; a body without a `results` field
    /// (or a hit without a `name`) becomes [`Error::Serialization`].
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let url = self.search_url(query);
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: compact_text(&body),
            });
        }

        let payload: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!("search for {query:?} matched {} hits", payload.results.len());
        Ok(payload.results)
    }

    /// Builds the request URL for a query, percent-encoding reserved
    /// characters.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

/// Validates and normalizes an endpoint base URL.
///
/// Requires an `http://` or `https://` scheme and strips trailing slashes
/// so path concatenation stays predictable.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidInput(
            "search base URL must not be empty".to_string(),
        ));
    }
    if !is_http_url(&base) {
        return Err(Error::InvalidInput(
            "search base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client(base_url: &str) -> SearchClient {
        SearchClient::new(base_url).unwrap()
    }

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("localhost:8000").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/").unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn search_url_interpolates_plain_queries() {
        assert_eq!(
            client("http://localhost:8000").search_url("widget"),
            "http://localhost:8000/search?query=widget"
        );
    }

    #[test]
    fn search_url_encodes_reserved_characters() {
        assert_eq!(
            client("http://localhost:8000").search_url("blue widget & co?"),
            "http://localhost:8000/search?query=blue%20widget%20%26%20co%3F"
        );
    }

    #[test]
    fn response_decodes_single_hit() {
        let payload: SearchResponse =
            serde_json::from_str(r#"{"results":[{"_source":{"name":"Widget"}}]}"#).unwrap();
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].name(), "Widget");
    }

    #[test]
    fn response_decodes_empty_results() {
        let payload: SearchResponse = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(payload.results.is_empty());
    }

    #[test]
    fn response_without_results_field_is_an_error() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"hits":[]}"#).is_err());
    }

    #[test]
    fn response_preserves_hit_order() {
        let payload: SearchResponse = serde_json::from_str(
            r#"{"results":[
                {"_source":{"name":"Anvil"}},
                {"_source":{"name":"Widget"}},
                {"_source":{"name":"Sprocket"}}
            ]}"#,
        )
        .unwrap();
        let names: Vec<&str> = payload.results.iter().map(SearchHit::name).collect();
        assert_eq!(names, vec!["Anvil", "Widget", "Sprocket"]);
    }
}
