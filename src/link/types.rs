//! Link value type

use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// A hypermedia link: a relation name and the URL it points to.
///
/// Several links on one resource may share a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Relation (e.g. "self", "next")
    #[serde(skip)]
    pub rel: String,
    /// Target URL
    pub href: String,
    /// Extra link attributes (`templated`, `title`, ...)
    #[serde(flatten)]
    pub attributes: JsonObject,
}

impl Link {
    /// Create a new link
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            attributes: JsonObject::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&JsonValue> {
        self.attributes.get(name)
    }
}
