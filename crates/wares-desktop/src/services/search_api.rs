//! Search endpoint client for the desktop app.

use wares_core::models::SearchHit;
use wares_core::Result;

use crate::config::search_base_url;

#[derive(Debug, Clone)]
pub struct SearchApiClient {
    inner: wares_core::search::SearchClient,
}

impl SearchApiClient {
    /// Builds a client from the environment-resolved endpoint configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(search_base_url())
    }

    /// Builds a client for an explicit endpoint base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: wares_core::search::SearchClient::new(base_url)?,
        })
    }

    /// Returns the base URL this client was configured with.
    #[allow(dead_code)] // Surfaced in settings/debug views later
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.inner.search(query).await
    }
}
