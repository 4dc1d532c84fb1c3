//! HAL resource representation
//!
//! A [`HalResource`] holds data, an ordered list of links and embedded
//! resources. It serializes to HAL+JSON:
//!
//! ```text
//! {
//!   "_links": { "self": { "href": "/books" }, "next": { "href": "/books?page=2" } },
//!   "_total_items": 25,
//!   "_embedded": { "books": [ ... ] }
//! }
//! ```
//!
//! A relation carried by more than one link serializes as an array.

use crate::error::Result;
use crate::link::Link;
use crate::types::{JsonObject, JsonValue};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Data key holding the total item count of a collection
pub const TOTAL_ITEMS_KEY: &str = "_total_items";

/// Data key holding the current page of a paginated collection
pub const PAGE_KEY: &str = "_page";

/// Data key holding the page count of a paginated collection
pub const PAGE_COUNT_KEY: &str = "_page_count";

/// A resource with links, data and embedded resources
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalResource {
    data: JsonObject,
    links: Vec<Link>,
    embedded: IndexMap<String, Vec<HalResource>>,
}

impl HalResource {
    /// Create a resource from data and links
    pub fn new(data: JsonObject, links: Vec<Link>) -> Self {
        Self {
            data,
            links,
            embedded: IndexMap::new(),
        }
    }

    /// Create a link-less resource from extracted properties
    pub fn from_properties(data: JsonObject) -> Self {
        Self::new(data, Vec::new())
    }

    /// Add a link
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Set a data element
    #[must_use]
    pub fn with_element(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Embed resources under `rel`, appending to any already embedded there
    #[must_use]
    pub fn with_embedded(mut self, rel: impl Into<String>, resources: Vec<HalResource>) -> Self {
        self.embedded.entry(rel.into()).or_default().extend(resources);
        self
    }

    /// All links, in order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Links with the given relation, in order
    pub fn links_by_rel<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.rel == rel)
    }

    /// First link with the given relation
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }

    /// Check whether a link with the given relation exists
    pub fn has_link(&self, rel: &str) -> bool {
        self.link(rel).is_some()
    }

    /// Data elements
    pub fn data(&self) -> &JsonObject {
        &self.data
    }

    /// A single data element
    pub fn element(&self, name: &str) -> Option<&JsonValue> {
        self.data.get(name)
    }

    /// Resources embedded under `rel`
    pub fn embedded(&self, rel: &str) -> Option<&[HalResource]> {
        self.embedded.get(rel).map(Vec::as_slice)
    }

    /// Relations that have embedded resources
    pub fn embedded_relations(&self) -> impl Iterator<Item = &str> {
        self.embedded.keys().map(String::as_str)
    }

    /// Total item count of a collection resource
    pub fn total_items(&self) -> Option<u64> {
        self.element(TOTAL_ITEMS_KEY).and_then(JsonValue::as_u64)
    }

    /// Current page of a paginated collection resource
    pub fn page(&self) -> Option<u64> {
        self.element(PAGE_KEY).and_then(JsonValue::as_u64)
    }

    /// Page count of a paginated collection resource
    pub fn page_count(&self) -> Option<u64> {
        self.element(PAGE_COUNT_KEY).and_then(JsonValue::as_u64)
    }

    /// Render as a HAL+JSON value
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Links grouped by relation for serialization
struct LinkSet<'a>(&'a [Link]);

impl Serialize for LinkSet<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut grouped: IndexMap<&str, Vec<&Link>> = IndexMap::new();
        for link in self.0 {
            grouped.entry(link.rel.as_str()).or_default().push(link);
        }

        let mut map = serializer.serialize_map(Some(grouped.len()))?;
        for (rel, links) in &grouped {
            if let [single] = links.as_slice() {
                map.serialize_entry(rel, single)?;
            } else {
                map.serialize_entry(rel, links)?;
            }
        }
        map.end()
    }
}

impl Serialize for HalResource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.links.is_empty() {
            map.serialize_entry("_links", &LinkSet(&self.links))?;
        }
        for (name, value) in &self.data {
            map.serialize_entry(name, value)?;
        }
        if !self.embedded.is_empty() {
            map.serialize_entry("_embedded", &self.embedded)?;
        }
        map.end()
    }
}
