//! Collection module
//!
//! Domain object and collection capabilities consumed by the resource
//! generator, plus in-memory implementations.
//!
//! # Overview
//!
//! - [`HalObject`] - anything that can be turned into a resource
//! - [`Collection`] - iterable view of a collection object
//! - [`PaginationInfo`] - optional page introspection of a collection
//! - [`Paginator`], [`ListCollection`], [`Record`] - in-memory implementations

mod paginator;
mod types;

pub use paginator::{ListCollection, Paginator, Record, DEFAULT_ITEMS_PER_PAGE};
pub use types::{Collection, HalObject, PaginationInfo};

#[cfg(test)]
mod tests;
