//! Data models for Wares

mod hit;

pub use hit::{HitSource, SearchHit};
