//! Link module
//!
//! Hypermedia links and the route-to-URL resolution seam.
//!
//! # Overview
//!
//! - [`Link`] - a relation plus a target URL
//! - [`RequestContext`] - ambient request data handed to URL generators
//! - [`UrlGenerator`] - resolves a named route and parameters to a URL
//! - [`LinkGenerator`] - wraps a [`UrlGenerator`] and produces [`Link`]s
//! - [`RouteTable`] - template-based [`UrlGenerator`] (generation only)

mod generator;
mod route_table;
mod types;

pub use generator::{LinkGenerator, RequestContext, UrlGenerator};
pub use route_table::RouteTable;
pub use types::Link;

#[cfg(test)]
mod tests;
