//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use crate::services::SearchApiClient;
use crate::state::AppState;
use crate::theme::resolve_theme_from_env;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let query = use_signal(String::new);
    let results = use_signal(Vec::new);
    let latest_submit = use_signal(|| 0u64);
    let theme = use_signal(resolve_theme_from_env);

    // The client constructor only validates configuration, so a failure here
    // means a bad WARES_SEARCH_URL. Degrade to a client-less state and log.
    let search_client = use_signal(|| match SearchApiClient::from_env() {
        Ok(client) => {
            tracing::info!("Search endpoint: {}", client.base_url());
            Some(Arc::new(client))
        }
        Err(error) => {
            tracing::error!("Failed to configure search client: {error}");
            None
        }
    });

    use_context_provider(|| AppState {
        query,
        results,
        search_client,
        latest_submit,
        theme,
    });

    let colors = theme().palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
