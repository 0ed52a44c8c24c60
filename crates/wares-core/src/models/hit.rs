//! Search hit model
//!
//! The search endpoint returns document-store hits. Each hit carries its
//! payload under a `_source` wrapper; the only field Wares relies on is
//! `name`, everything else is kept as opaque JSON so hits survive a
//! serialize round trip unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One hit returned by the search endpoint.
///
/// Hit-level metadata (`_id`, `_score`, `_index`, ...) is retained but not
/// interpreted. Deserialization fails when `_source` is missing, so a
/// malformed hit surfaces as an error instead of a silent missing-field
/// access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document payload
    #[serde(rename = "_source")]
    pub source: HitSource,
    /// Remaining hit-level fields, passed through untouched
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// The `_source` payload of a search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitSource {
    /// Product name shown in result lists
    pub name: String,
    /// Remaining payload fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchHit {
    /// Name of the product this hit matched.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.source.name
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hit_decodes_name_under_source_wrapper() {
        let hit: SearchHit = serde_json::from_str(
            r#"{"_index":"products","_score":1.3,"_source":{"name":"Widget","price":9.99}}"#,
        )
        .unwrap();
        assert_eq!(hit.name(), "Widget");
        assert_eq!(hit.source.extra["price"], 9.99);
        assert_eq!(hit.metadata["_index"], "products");
    }

    #[test]
    fn hit_without_name_is_an_error() {
        let result = serde_json::from_str::<SearchHit>(r#"{"_source":{"title":"Widget"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn hit_without_source_is_an_error() {
        let result = serde_json::from_str::<SearchHit>(r#"{"name":"Widget"}"#);
        assert!(result.is_err());
    }
}
