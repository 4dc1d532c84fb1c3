//! URL and link generation seam
//!
//! The collection strategies never build routed URLs themselves; they ask a
//! [`LinkGenerator`], which delegates to whatever [`UrlGenerator`] the
//! application wired in.

use super::types::Link;
use crate::error::Result;
use crate::types::ParamMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Ambient request information passed through to URL generators.
///
/// The collection core never reads these fields.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Scheme and authority to prefix generated paths with
    pub base_url: Option<String>,
    /// Route attributes matched for the current request; a URL generator
    /// may use them for placeholders the caller leaves unset
    pub attributes: ParamMap,
}

impl RequestContext {
    /// Create an empty request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a route attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Resolves a named route to a URL
pub trait UrlGenerator: Send + Sync {
    /// Generate the URL for `route` with the given path and query parameters
    fn generate(
        &self,
        request: &RequestContext,
        route: &str,
        route_params: &ParamMap,
        query_params: &ParamMap,
    ) -> Result<String>;
}

/// Produces [`Link`]s from routing information
#[derive(Clone)]
pub struct LinkGenerator {
    url_generator: Arc<dyn UrlGenerator>,
}

impl LinkGenerator {
    /// Create a link generator backed by `url_generator`
    pub fn new(url_generator: impl UrlGenerator + 'static) -> Self {
        Self {
            url_generator: Arc::new(url_generator),
        }
    }

    /// Resolve `route` and wrap the URL in a link with relation `rel`
    pub fn from_route(
        &self,
        rel: &str,
        request: &RequestContext,
        route: &str,
        route_params: &ParamMap,
        query_params: &ParamMap,
    ) -> Result<Link> {
        let href = self
            .url_generator
            .generate(request, route, route_params, query_params)?;
        trace!(rel, route, href = %href, "Generated routed link");
        Ok(Link::new(rel, href))
    }
}

impl fmt::Debug for LinkGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkGenerator").finish_non_exhaustive()
    }
}
