//! Collection strategy module
//!
//! Supports: route based links, URL based links
//!
//! # Overview
//!
//! A [`Strategy`] turns a collection object plus its [`CollectionMetadata`]
//! into a [`HalResource`](crate::resource::HalResource). Both strategies share
//! [`extract_collection`], which embeds the items and lays out the `self`,
//! `first`, `prev`, `next` and `last` links; each strategy only decides how a
//! link for a given page is built ([`CollectionLinks`]).
//!
//! [`CollectionMetadata`]: crate::metadata::CollectionMetadata

mod extract;
mod route_based;
mod url_based;

pub use extract::{extract_collection, navigation_pages, CollectionLinks, Strategy};
pub use route_based::RouteBasedCollectionStrategy;
pub use url_based::UrlBasedCollectionStrategy;
