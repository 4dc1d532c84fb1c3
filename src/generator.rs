//! Resource generation
//!
//! [`ResourceGenerator`] is the entry point collection strategies call back
//! into for every embedded item. [`HalGenerator`] is the default
//! implementation: it looks up collection metadata by type name and hands
//! collections to the strategy registered for the metadata kind. Objects
//! without metadata become plain resources built from their properties.

use crate::collection::HalObject;
use crate::error::{Error, Result};
use crate::link::{LinkGenerator, RequestContext};
use crate::metadata::{MetadataKind, MetadataMap};
use crate::resource::HalResource;
use crate::strategy::{RouteBasedCollectionStrategy, Strategy, UrlBasedCollectionStrategy};
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Turns arbitrary domain objects into resources
pub trait ResourceGenerator: Send + Sync {
    /// Create the resource for `object`
    fn from_object(&self, object: &dyn HalObject, request: &RequestContext)
        -> Result<HalResource>;

    /// Link generator used for routed links
    fn link_generator(&self) -> &LinkGenerator;
}

/// Metadata driven [`ResourceGenerator`]
pub struct HalGenerator {
    metadata: MetadataMap,
    link_generator: LinkGenerator,
    strategies: HashMap<MetadataKind, Box<dyn Strategy>>,
}

impl HalGenerator {
    /// Create a generator with the default strategy for each metadata kind
    pub fn new(metadata: MetadataMap, link_generator: LinkGenerator) -> Self {
        let mut strategies: HashMap<MetadataKind, Box<dyn Strategy>> = HashMap::new();
        strategies.insert(
            MetadataKind::RouteBased,
            Box::new(RouteBasedCollectionStrategy),
        );
        strategies.insert(MetadataKind::UrlBased, Box::new(UrlBasedCollectionStrategy));

        Self {
            metadata,
            link_generator,
            strategies,
        }
    }

    /// Register the strategy used for a metadata kind
    #[must_use]
    pub fn with_strategy(mut self, kind: MetadataKind, strategy: impl Strategy + 'static) -> Self {
        self.strategies.insert(kind, Box::new(strategy));
        self
    }

    /// Metadata registry
    pub fn metadata(&self) -> &MetadataMap {
        &self.metadata
    }
}

impl ResourceGenerator for HalGenerator {
    fn from_object(
        &self,
        object: &dyn HalObject,
        request: &RequestContext,
    ) -> Result<HalResource> {
        let Some(metadata) = self.metadata.get(object.type_name()) else {
            if object.as_collection().is_some() {
                return Err(Error::metadata_not_found(object.type_name()));
            }
            trace!(object = object.type_name(), "Extracting plain resource");
            return Ok(HalResource::from_properties(object.properties()));
        };

        let strategy = self.strategies.get(&metadata.kind()).ok_or_else(|| {
            Error::config(format!("No strategy registered for {}", metadata.kind()))
        })?;

        trace!(
            object = object.type_name(),
            strategy = strategy.name(),
            "Dispatching collection"
        );
        strategy.create_resource(object, metadata, self, request)
    }

    fn link_generator(&self) -> &LinkGenerator {
        &self.link_generator
    }
}

impl fmt::Debug for HalGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HalGenerator")
            .field("metadata", &self.metadata)
            .field("link_generator", &self.link_generator)
            .finish_non_exhaustive()
    }
}
