//! Collection metadata types

use crate::types::ParamMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default name of the pagination parameter
pub const DEFAULT_PAGINATION_PARAM: &str = "page";

fn default_pagination_param() -> String {
    DEFAULT_PAGINATION_PARAM.to_string()
}

// ============================================================================
// Pagination Parameter Type
// ============================================================================

/// Where the page number is injected when generating page links
///
/// Parsing is lenient: `"placeholder"` selects [`Placeholder`](Self::Placeholder),
/// any other value selects [`Query`](Self::Query).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaginationParamType {
    /// Page number goes into a route parameter / URL placeholder
    Placeholder,
    /// Page number goes into the query string
    #[default]
    Query,
}

impl PaginationParamType {
    /// Configuration name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Query => "query",
        }
    }
}

impl From<&str> for PaginationParamType {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("placeholder") {
            Self::Placeholder
        } else {
            Self::Query
        }
    }
}

impl From<String> for PaginationParamType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for PaginationParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Shared Accessors
// ============================================================================

/// Settings every collection metadata variant provides
pub trait CollectionDescriptor {
    /// Type name of the collection this metadata describes
    fn collection_class(&self) -> &str;
    /// Relation items are embedded under
    fn collection_relation(&self) -> &str;
    /// Name of the pagination parameter
    fn pagination_param(&self) -> &str;
    /// Where the page number is injected
    fn pagination_param_type(&self) -> PaginationParamType;
}

// ============================================================================
// Route Based
// ============================================================================

/// Collection links generated from a named route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteBasedCollectionMetadata {
    /// Collection type name
    pub collection_class: String,
    /// Relation items are embedded under
    pub collection_relation: String,
    /// Route name
    pub route: String,
    /// Route parameters used verbatim for every link
    #[serde(default)]
    pub route_params: ParamMap,
    /// Query string arguments used verbatim for every link
    #[serde(default)]
    pub query_string_arguments: ParamMap,
    /// Name of the pagination parameter
    #[serde(default = "default_pagination_param")]
    pub pagination_param: String,
    /// Where the page number is injected
    #[serde(default)]
    pub pagination_param_type: PaginationParamType,
}

impl RouteBasedCollectionMetadata {
    /// Name reported in metadata type errors
    pub const TYPE_NAME: &'static str = "RouteBasedCollectionMetadata";

    /// Create route based metadata with query pagination on `page`
    pub fn new(
        collection_class: impl Into<String>,
        collection_relation: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            collection_class: collection_class.into(),
            collection_relation: collection_relation.into(),
            route: route.into(),
            route_params: ParamMap::new(),
            query_string_arguments: ParamMap::new(),
            pagination_param: default_pagination_param(),
            pagination_param_type: PaginationParamType::default(),
        }
    }

    /// Set route parameters
    #[must_use]
    pub fn with_route_params(mut self, params: ParamMap) -> Self {
        self.route_params = params;
        self
    }

    /// Set query string arguments
    #[must_use]
    pub fn with_query_string_arguments(mut self, args: ParamMap) -> Self {
        self.query_string_arguments = args;
        self
    }

    /// Set pagination parameter name and type
    #[must_use]
    pub fn with_pagination(
        mut self,
        param: impl Into<String>,
        param_type: PaginationParamType,
    ) -> Self {
        self.pagination_param = param.into();
        self.pagination_param_type = param_type;
        self
    }
}

impl CollectionDescriptor for RouteBasedCollectionMetadata {
    fn collection_class(&self) -> &str {
        &self.collection_class
    }

    fn collection_relation(&self) -> &str {
        &self.collection_relation
    }

    fn pagination_param(&self) -> &str {
        &self.pagination_param
    }

    fn pagination_param_type(&self) -> PaginationParamType {
        self.pagination_param_type
    }
}

// ============================================================================
// URL Based
// ============================================================================

/// Collection links generated by rewriting a literal URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlBasedCollectionMetadata {
    /// Collection type name
    pub collection_class: String,
    /// Relation items are embedded under
    pub collection_relation: String,
    /// Base URL; may contain a placeholder token, a query and a fragment
    pub url: String,
    /// Name of the pagination parameter
    #[serde(default = "default_pagination_param")]
    pub pagination_param: String,
    /// Where the page number is injected
    #[serde(default)]
    pub pagination_param_type: PaginationParamType,
}

impl UrlBasedCollectionMetadata {
    /// Name reported in metadata type errors
    pub const TYPE_NAME: &'static str = "UrlBasedCollectionMetadata";

    /// Create URL based metadata with query pagination on `page`
    pub fn new(
        collection_class: impl Into<String>,
        collection_relation: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            collection_class: collection_class.into(),
            collection_relation: collection_relation.into(),
            url: url.into(),
            pagination_param: default_pagination_param(),
            pagination_param_type: PaginationParamType::default(),
        }
    }

    /// Set pagination parameter name and type
    #[must_use]
    pub fn with_pagination(
        mut self,
        param: impl Into<String>,
        param_type: PaginationParamType,
    ) -> Self {
        self.pagination_param = param.into();
        self.pagination_param_type = param_type;
        self
    }
}

impl CollectionDescriptor for UrlBasedCollectionMetadata {
    fn collection_class(&self) -> &str {
        &self.collection_class
    }

    fn collection_relation(&self) -> &str {
        &self.collection_relation
    }

    fn pagination_param(&self) -> &str {
        &self.pagination_param
    }

    fn pagination_param_type(&self) -> PaginationParamType {
        self.pagination_param_type
    }
}

// ============================================================================
// Collection Metadata
// ============================================================================

/// Discriminant of [`CollectionMetadata`], used to key strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    RouteBased,
    UrlBased,
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteBased => f.write_str(RouteBasedCollectionMetadata::TYPE_NAME),
            Self::UrlBased => f.write_str(UrlBasedCollectionMetadata::TYPE_NAME),
        }
    }
}

/// Metadata describing how to render one collection type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CollectionMetadata {
    /// Links resolved through the router
    #[serde(rename = "route_based_collection")]
    RouteBased(RouteBasedCollectionMetadata),
    /// Links built from a literal URL
    #[serde(rename = "url_based_collection")]
    UrlBased(UrlBasedCollectionMetadata),
}

impl CollectionMetadata {
    /// Variant discriminant
    pub fn kind(&self) -> MetadataKind {
        match self {
            Self::RouteBased(_) => MetadataKind::RouteBased,
            Self::UrlBased(_) => MetadataKind::UrlBased,
        }
    }

    /// Name of the concrete metadata type
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RouteBased(_) => RouteBasedCollectionMetadata::TYPE_NAME,
            Self::UrlBased(_) => UrlBasedCollectionMetadata::TYPE_NAME,
        }
    }

    fn descriptor(&self) -> &dyn CollectionDescriptor {
        match self {
            Self::RouteBased(m) => m,
            Self::UrlBased(m) => m,
        }
    }
}

impl CollectionDescriptor for CollectionMetadata {
    fn collection_class(&self) -> &str {
        self.descriptor().collection_class()
    }

    fn collection_relation(&self) -> &str {
        self.descriptor().collection_relation()
    }

    fn pagination_param(&self) -> &str {
        self.descriptor().pagination_param()
    }

    fn pagination_param_type(&self) -> PaginationParamType {
        self.descriptor().pagination_param_type()
    }
}

impl From<RouteBasedCollectionMetadata> for CollectionMetadata {
    fn from(metadata: RouteBasedCollectionMetadata) -> Self {
        Self::RouteBased(metadata)
    }
}

impl From<UrlBasedCollectionMetadata> for CollectionMetadata {
    fn from(metadata: UrlBasedCollectionMetadata) -> Self {
        Self::UrlBased(metadata)
    }
}
