//! Common types used throughout hal-collection
//!
//! Shared type aliases for JSON payloads and ordered parameter maps.

use indexmap::IndexMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type (insertion ordered)
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Ordered name → value map used for route parameters and query arguments
pub type ParamMap = IndexMap<String, String>;

/// Build a [`ParamMap`] from string pairs
pub fn param_map<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> ParamMap
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_map_keeps_order() {
        let params = param_map([("type", "book"), ("author", "le-guin"), ("lang", "en")]);
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["type", "author", "lang"]);
    }
}
