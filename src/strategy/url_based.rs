//! URL based collection links
//!
//! Page links are produced by rewriting the configured URL directly. No
//! router is involved.

use super::extract::{extract_collection, CollectionLinks, Strategy};
use crate::collection::HalObject;
use crate::error::{Error, Result};
use crate::generator::ResourceGenerator;
use crate::link::{Link, RequestContext};
use crate::metadata::{CollectionMetadata, PaginationParamType, UrlBasedCollectionMetadata};
use crate::resource::HalResource;
use crate::uri;
use tracing::debug;

/// Collection strategy for [`UrlBasedCollectionMetadata`]
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlBasedCollectionStrategy;

impl UrlBasedCollectionStrategy {
    /// URL of `page` derived from the metadata's base URL.
    ///
    /// Placeholder pagination replaces the first literal occurrence of the
    /// pagination parameter name anywhere in the URL. Query pagination drops
    /// the fragment and sets the parameter in the query string.
    pub fn url_for_page(metadata: &UrlBasedCollectionMetadata, page: u64) -> String {
        let page = page.to_string();
        match metadata.pagination_param_type {
            PaginationParamType::Placeholder => {
                uri::replace_placeholder(&metadata.url, &metadata.pagination_param, &page)
            }
            PaginationParamType::Query => {
                uri::set_query_param(&metadata.url, &metadata.pagination_param, &page)
            }
        }
    }
}

impl CollectionLinks for UrlBasedCollectionStrategy {
    type Metadata = UrlBasedCollectionMetadata;

    const NAME: &'static str = "UrlBasedCollectionStrategy";

    fn generate_link_for_page(
        &self,
        rel: &str,
        page: u64,
        metadata: &UrlBasedCollectionMetadata,
        _generator: &dyn ResourceGenerator,
        _request: &RequestContext,
    ) -> Result<Link> {
        let href = Self::url_for_page(metadata, page);
        debug!(rel, page, href = %href, "Generated page link");
        Ok(Link::new(rel, href))
    }

    fn generate_self_link(
        &self,
        metadata: &UrlBasedCollectionMetadata,
        _generator: &dyn ResourceGenerator,
        _request: &RequestContext,
    ) -> Result<Link> {
        Ok(Link::new("self", metadata.url.clone()))
    }
}

impl Strategy for UrlBasedCollectionStrategy {
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
        let CollectionMetadata::UrlBased(metadata) = metadata else {
            return Err(Error::unexpected_metadata(
                metadata.type_name(),
                Self::NAME,
                UrlBasedCollectionMetadata::TYPE_NAME,
            ));
        };
        extract_collection(self, instance, metadata, generator, request)
    }
}
