//! Application services
//!
//! Services wrapping wares-core clients for the desktop app.

mod search_api;

pub use search_api::SearchApiClient;
