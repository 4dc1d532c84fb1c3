//! Collection capability traits

use crate::types::JsonObject;

/// A domain object handed to the resource generator
pub trait HalObject {
    /// Type name used to look up metadata for this object
    fn type_name(&self) -> &str;

    /// Iterable view of this object, if it is a collection
    fn as_collection(&self) -> Option<&dyn Collection> {
        None
    }

    /// Scalar data exposed as resource properties
    fn properties(&self) -> JsonObject {
        JsonObject::new()
    }
}

/// An iterable collection of domain objects
pub trait Collection {
    /// Items to embed, in iteration order
    fn items(&self) -> Box<dyn Iterator<Item = &dyn HalObject> + '_>;

    /// Page introspection, if the collection is paginated
    fn pagination(&self) -> Option<&dyn PaginationInfo> {
        None
    }
}

/// Read-only page state of a paginated collection
///
/// Pages are 1-based. A page count of 0 means there is nothing to page
/// through.
pub trait PaginationInfo {
    /// Current page number
    fn current_page(&self) -> u64;
    /// Number of pages
    fn page_count(&self) -> u64;
    /// Number of items across all pages
    fn total_items(&self) -> u64;
}
