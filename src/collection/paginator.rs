//! In-memory collections

use super::types::{Collection, HalObject, PaginationInfo};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Items per page when none is configured
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

// ============================================================================
// Record
// ============================================================================

/// A plain domain object backed by a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Type name used for metadata lookup
    pub type_name: String,
    /// Field values
    pub data: JsonObject,
}

impl Record {
    /// Create a record
    pub fn new(type_name: impl Into<String>, data: JsonObject) -> Self {
        Self {
            type_name: type_name.into(),
            data,
        }
    }

    /// Create a record from a JSON value, which must be an object
    pub fn from_value(type_name: impl Into<String>, value: JsonValue) -> Result<Self> {
        let type_name = type_name.into();
        match value {
            JsonValue::Object(data) => Ok(Self { type_name, data }),
            other => Err(Error::Other(format!(
                "{type_name} record must be a JSON object, got {other}"
            ))),
        }
    }
}

impl HalObject for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn properties(&self) -> JsonObject {
        self.data.clone()
    }
}

// ============================================================================
// List Collection
// ============================================================================

/// An unpaginated collection of items
#[derive(Debug, Clone)]
pub struct ListCollection<T> {
    /// Collection type name
    pub type_name: String,
    /// All items
    pub items: Vec<T>,
}

impl<T: HalObject> ListCollection<T> {
    /// Create a list collection
    pub fn new(type_name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            type_name: type_name.into(),
            items,
        }
    }
}

impl<T: HalObject> HalObject for ListCollection<T> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn as_collection(&self) -> Option<&dyn Collection> {
        Some(self)
    }
}

impl<T: HalObject> Collection for ListCollection<T> {
    fn items(&self) -> Box<dyn Iterator<Item = &dyn HalObject> + '_> {
        Box::new(self.items.iter().map(|item| item as &dyn HalObject))
    }
}

// ============================================================================
// Paginator
// ============================================================================

/// A collection that exposes one page of its items at a time
///
/// The requested page is normalized on read: pages below 1 become 1 and
/// pages past the end become the last page. An items-per-page of 0 puts
/// every item on a single page. An empty paginator has 0 pages and sits on
/// page 1.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    /// Collection type name
    pub type_name: String,
    items: Vec<T>,
    items_per_page: usize,
    requested_page: u64,
}

impl<T: HalObject> Paginator<T> {
    /// Create a paginator positioned on page 1
    pub fn new(type_name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            type_name: type_name.into(),
            items,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            requested_page: 1,
        }
    }

    /// Set the number of items per page
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Set the current page
    #[must_use]
    pub fn with_current_page(mut self, page: u64) -> Self {
        self.requested_page = page;
        self
    }

    /// Move to another page
    pub fn set_current_page(&mut self, page: u64) {
        self.requested_page = page;
    }

    /// Effective number of items per page
    pub fn items_per_page(&self) -> usize {
        if self.items_per_page == 0 {
            self.items.len().max(1)
        } else {
            self.items_per_page
        }
    }

    /// Items on the current page
    pub fn current_items(&self) -> &[T] {
        if self.items.is_empty() {
            return &[];
        }
        let per_page = self.items_per_page();
        let start = (self.current_page() as usize - 1) * per_page;
        let end = (start + per_page).min(self.items.len());
        &self.items[start..end]
    }
}

impl<T: HalObject> PaginationInfo for Paginator<T> {
    fn current_page(&self) -> u64 {
        let count = self.page_count();
        if count == 0 {
            return 1;
        }
        self.requested_page.clamp(1, count)
    }

    fn page_count(&self) -> u64 {
        if self.items.is_empty() {
            return 0;
        }
        self.items.len().div_ceil(self.items_per_page()) as u64
    }

    fn total_items(&self) -> u64 {
        self.items.len() as u64
    }
}

impl<T: HalObject> HalObject for Paginator<T> {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn as_collection(&self) -> Option<&dyn Collection> {
        Some(self)
    }
}

impl<T: HalObject> Collection for Paginator<T> {
    fn items(&self) -> Box<dyn Iterator<Item = &dyn HalObject> + '_> {
        Box::new(self.current_items().iter().map(|item| item as &dyn HalObject))
    }

    fn pagination(&self) -> Option<&dyn PaginationInfo> {
        Some(self)
    }
}
