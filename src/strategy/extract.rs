//! Strategy contract and shared collection extraction

use crate::collection::HalObject;
use crate::error::{Error, Result};
use crate::generator::ResourceGenerator;
use crate::link::{Link, RequestContext};
use crate::metadata::{CollectionDescriptor, CollectionMetadata};
use crate::resource::{HalResource, PAGE_COUNT_KEY, PAGE_KEY, TOTAL_ITEMS_KEY};
use crate::types::{JsonObject, JsonValue};
use tracing::debug;

/// Builds a collection resource from a collection object
pub trait Strategy: Send + Sync {
    /// Name reported in errors
    fn name(&self) -> &'static str;

    /// Create the resource for `instance`
    ///
    /// Fails with [`Error::UnexpectedMetadataType`] when `metadata` is not
    /// the variant this strategy handles, and with
    /// [`Error::InvalidCollection`] when `instance` is not iterable.
    fn create_resource(
        &self,
        instance: &dyn HalObject,
        metadata: &CollectionMetadata,
        generator: &dyn ResourceGenerator,
        request: &RequestContext,
    ) -> Result<HalResource>;
}

/// Link construction policy plugged into [`extract_collection`]
pub trait CollectionLinks {
    /// Metadata variant this policy reads
    type Metadata: CollectionDescriptor;

    /// Strategy name reported in errors
    const NAME: &'static str;

    /// Build the link with relation `rel` pointing at `page`
    fn generate_link_for_page(
        &self,
        rel: &str,
        page: u64,
        metadata: &Self::Metadata,
        generator: &dyn ResourceGenerator,
        request: &RequestContext,
    ) -> Result<Link>;

    /// Build the `self` link
    fn generate_self_link(
        &self,
        metadata: &Self::Metadata,
        generator: &dyn ResourceGenerator,
        request: &RequestContext,
    ) -> Result<Link>;
}

/// Relations and target pages of the navigation links for a page position.
///
/// Order: `first`, `prev`, `next`, `last`.
pub fn navigation_pages(current_page: u64, page_count: u64) -> Vec<(&'static str, u64)> {
    let mut pages = Vec::with_capacity(4);
    if page_count >= 1 {
        pages.push(("first", 1));
    }
    if current_page > 1 {
        pages.push(("prev", current_page - 1));
    }
    if current_page < page_count {
        pages.push(("next", current_page + 1));
    }
    if page_count >= 1 {
        pages.push(("last", page_count));
    }
    pages
}

/// Embed every item of `instance` and attach the navigation links.
///
/// Without pagination info the page count is treated as 0: only the `self`
/// link is emitted and `_total_items` is the number of items iterated.
pub fn extract_collection<S: CollectionLinks>(
    strategy: &S,
    instance: &dyn HalObject,
    metadata: &S::Metadata,
    generator: &dyn ResourceGenerator,
    request: &RequestContext,
) -> Result<HalResource> {
    let collection = instance
        .as_collection()
        .ok_or_else(|| Error::invalid_collection(instance.type_name(), S::NAME))?;

    let mut links = vec![strategy.generate_self_link(metadata, generator, request)?];

    let mut items = Vec::new();
    for item in collection.items() {
        items.push(generator.from_object(item, request)?);
    }

    let mut data = JsonObject::new();
    match collection.pagination() {
        Some(info) => {
            let page = info.current_page();
            let page_count = info.page_count();
            for (rel, target) in navigation_pages(page, page_count) {
                links.push(strategy.generate_link_for_page(
                    rel, target, metadata, generator, request,
                )?);
            }
            data.insert(TOTAL_ITEMS_KEY.to_string(), info.total_items().into());
            data.insert(PAGE_KEY.to_string(), page.into());
            data.insert(PAGE_COUNT_KEY.to_string(), page_count.into());
        }
        None => {
            data.insert(
                TOTAL_ITEMS_KEY.to_string(),
                JsonValue::from(items.len() as u64),
            );
        }
    }

    debug!(
        strategy = S::NAME,
        collection = instance.type_name(),
        items = items.len(),
        links = links.len(),
        "Extracted collection"
    );

    Ok(HalResource::new(data, links).with_embedded(metadata.collection_relation(), items))
}
