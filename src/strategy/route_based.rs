//! Route based collection links
//!
//! Page links are produced by the router: the page number is merged into the
//! route parameters (placeholder pagination) or into the query string
//! arguments (query pagination) and the result is resolved by the
//! [`LinkGenerator`](crate::link::LinkGenerator).

use super::extract::{extract_collection, CollectionLinks, Strategy};
use crate::collection::HalObject;
use crate::error::{Error, Result};
use crate::generator::ResourceGenerator;
use crate::link::{Link, RequestContext};
use crate::metadata::{CollectionMetadata, PaginationParamType, RouteBasedCollectionMetadata};
use crate::resource::HalResource;
use crate::types::ParamMap;
use tracing::debug;

/// Collection strategy for [`RouteBasedCollectionMetadata`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteBasedCollectionStrategy;

impl RouteBasedCollectionStrategy {
    /// Route parameters and query arguments for a link to `page`.
    ///
    /// Exactly one of the two maps receives the page number, overriding any
    /// existing entry with the same name.
    pub fn params_for_page(
        metadata: &RouteBasedCollectionMetadata,
        page: u64,
    ) -> (ParamMap, ParamMap) {
        let mut route_params = metadata.route_params.clone();
        let mut query_params = metadata.query_string_arguments.clone();
        let target = match metadata.pagination_param_type {
            PaginationParamType::Placeholder => &mut route_params,
            PaginationParamType::Query => &mut query_params,
        };
        target.insert(metadata.pagination_param.clone(), page.to_string());
        (route_params, query_params)
    }
}

impl CollectionLinks for RouteBasedCollectionStrategy {
    type Metadata = RouteBasedCollectionMetadata;

    const NAME: &'static str = "RouteBasedCollectionStrategy";

    fn generate_link_for_page(
        &self,
        rel: &str,
        page: u64,
        metadata: &RouteBasedCollectionMetadata,
        generator: &dyn ResourceGenerator,
        request: &RequestContext,
    ) -> Result<Link> {
        let (route_params, query_params) = Self::params_for_page(metadata, page);
        debug!(rel, page, route = %metadata.route, "Generating routed page link");
        generator.link_generator().from_route(
            rel,
            request,
            &metadata.route,
            &route_params,
            &query_params,
        )
    }

    fn generate_self_link(
        &self,
        metadata: &RouteBasedCollectionMetadata,
        generator: &dyn ResourceGenerator,
        request: &RequestContext,
    ) -> Result<Link> {
        generator.link_generator().from_route(
            "self",
            request,
            &metadata.route,
            &ParamMap::new(),
            &ParamMap::new(),
        )
    }
}

impl Strategy for RouteBasedCollectionStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn create_resource(
        &self,
        instance: &dyn HalObject,
        metadata: &CollectionMetadata,
        generator: &dyn ResourceGenerator,
        request: &RequestContext,
    ) -> Result<HalResource> {
        let CollectionMetadata::RouteBased(metadata) = metadata else {
            return Err(Error::unexpected_metadata(
                metadata.type_name(),
                Self::NAME,
                RouteBasedCollectionMetadata::TYPE_NAME,
            ));
        };
        extract_collection(self, instance, metadata, generator, request)
    }
}
