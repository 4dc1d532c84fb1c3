//! Collection metadata module
//!
//! Describes how a collection type is turned into a paginated resource.
//!
//! # Overview
//!
//! - [`CollectionMetadata`] - route based or URL based description
//! - [`PaginationParamType`] - where the page number is injected
//! - [`MetadataMap`] - registry keyed by collection type name

mod map;
mod types;

pub use map::MetadataMap;
pub use types::{
    CollectionDescriptor, CollectionMetadata, MetadataKind, PaginationParamType,
    RouteBasedCollectionMetadata, UrlBasedCollectionMetadata, DEFAULT_PAGINATION_PARAM,
};
