//! wares-core - Core library for Wares
//!
//! This crate contains the shared models and the search endpoint client
//! used by all Wares interfaces (desktop, CLI).

pub mod error;
pub mod models;
pub mod search;
pub mod util;

pub use error::{Error, Result};
pub use models::{HitSource, SearchHit};
pub use search::SearchClient;
