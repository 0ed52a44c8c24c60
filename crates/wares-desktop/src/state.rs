//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use dioxus::prelude::*;

use wares_core::models::SearchHit;

use crate::services::SearchApiClient;
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current search query, updated on every keystroke
    pub query: Signal<String>,
    /// Hits from the most recent successful search; empty before any search
    pub results: Signal<Vec<SearchHit>>,
    /// Search endpoint client, None when configuration failed at startup
    pub search_client: Signal<Option<Arc<SearchApiClient>>>,
    /// Ticket of the most recent submit; stale responses are discarded
    pub latest_submit: Signal<u64>,
    /// Resolved theme
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Submit the current query to the search endpoint.
    ///
    /// Issues one GET and replaces `results` with the response hits. The UI
    /// stays responsive while the request is in flight; a new submit takes a
    /// fresh ticket and any response that is no longer the latest ticket is
    /// dropped, so `results` always tracks the most recent submit. On failure
    /// the error is logged and `results` is left unchanged.
    pub fn submit_search(mut self) {
        let query = (self.query)();
        let Some(client) = (self.search_client)() else {
            tracing::warn!("Search client not configured; ignoring submit");
            return;
        };

        let ticket = (self.latest_submit)() + 1;
        self.latest_submit.set(ticket);

        spawn(async move {
            match client.search(&query).await {
                Ok(hits) => {
                    if *self.latest_submit.peek() != ticket {
                        tracing::debug!("Dropping stale response for query {query:?}");
                        return;
                    }
                    tracing::info!("Search for {query:?} returned {} hits", hits.len());
                    self.results.set(hits);
                }
                Err(error) => {
                    tracing::error!("Search for {query:?} failed: {error}");
                }
            }
        });
    }
}
