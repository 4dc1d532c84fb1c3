//! Metadata registry

use super::types::{CollectionDescriptor, CollectionMetadata};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Collection metadata keyed by collection type name
#[derive(Debug, Clone, Default)]
pub struct MetadataMap {
    entries: IndexMap<String, CollectionMetadata>,
}

impl MetadataMap {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of metadata entries
    pub fn from_entries(entries: impl IntoIterator<Item = CollectionMetadata>) -> Result<Self> {
        let mut map = Self::new();
        for metadata in entries {
            map.add(metadata)?;
        }
        Ok(map)
    }

    /// Register metadata; a collection class may only be registered once
    pub fn add(&mut self, metadata: impl Into<CollectionMetadata>) -> Result<()> {
        let metadata = metadata.into();
        let class = metadata.collection_class().to_string();
        if self.entries.contains_key(&class) {
            return Err(Error::config(format!(
                "Metadata for collection class '{class}' is already registered"
            )));
        }
        self.entries.insert(class, metadata);
        Ok(())
    }

    /// Look up metadata for a collection type
    pub fn get(&self, class: &str) -> Option<&CollectionMetadata> {
        self.entries.get(class)
    }

    /// Check whether metadata exists for a collection type
    pub fn has(&self, class: &str) -> bool {
        self.entries.contains_key(class)
    }

    /// Iterate over registered metadata in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CollectionMetadata> {
        self.entries.values()
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
