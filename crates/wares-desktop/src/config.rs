//! Search endpoint configuration.
//!
//! The desktop app talks to one fixed external collaborator. The default
//! matches the local development backend; deployments can point elsewhere
//! through the environment.

use wares_core::util::normalize_text_option;

/// Endpoint used when no override is configured.
pub const DEFAULT_SEARCH_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the search endpoint base URL.
pub const SEARCH_URL_ENV: &str = "WARES_SEARCH_URL";

/// Resolves the search endpoint base URL from the environment.
///
/// Falls back to [`DEFAULT_SEARCH_BASE_URL`] when the variable is unset or
/// blank. Validation happens in the client constructor, not here.
#[must_use]
pub fn search_base_url() -> String {
    normalize_text_option(std::env::var(SEARCH_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string())
}
