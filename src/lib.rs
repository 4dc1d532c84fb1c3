#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # hal-collection
//!
//! Turn in-memory collections into HAL resources with pagination links.
//!
//! ## Features
//!
//! - **Route Based Links**: page numbers merged into route parameters or query arguments
//! - **URL Based Links**: page numbers substituted into a literal URL or its query string
//! - **Recursive Embedding**: every item is resolved through the resource generator
//! - **HAL+JSON Output**: resources serialize with `_links` and `_embedded`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hal_collection::collection::{Paginator, Record};
//! use hal_collection::generator::{HalGenerator, ResourceGenerator};
//! use hal_collection::link::{LinkGenerator, RequestContext, RouteTable};
//! use hal_collection::metadata::{MetadataMap, RouteBasedCollectionMetadata};
//!
//! let mut metadata = MetadataMap::new();
//! metadata.add(RouteBasedCollectionMetadata::new("BookCollection", "books", "books"))?;
//! let routes = RouteTable::new().with_route("books", "/books");
//! let generator = HalGenerator::new(metadata, LinkGenerator::new(routes));
//!
//! let books = Paginator::new("BookCollection", records).with_current_page(2);
//! let resource = generator.from_object(&books, &RequestContext::new())?;
//! println!("{}", resource.to_json()?);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  ResourceGenerator::from_object(object, request)             │
//! │      metadata lookup → Strategy::create_resource             │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!            ┌──────────────────┴───────────────────┐
//!            │        extract_collection            │
//!            │  items → embedded, self/first/prev/  │
//!            │  next/last links                     │
//!            └──────────────────┬───────────────────┘
//!             ┌─────────────────┴──────────────────┐
//!   ┌─────────┴──────────┐              ┌──────────┴──────────┐
//!   │ RouteBased         │              │ UrlBased            │
//!   │ LinkGenerator      │              │ uri helpers         │
//!   └────────────────────┘              └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// URL string helpers
pub mod uri;

/// Links and URL generation
pub mod link;

/// Collection metadata
pub mod metadata;

/// Domain object and collection capabilities
pub mod collection;

/// HAL resource representation
pub mod resource;

/// Collection strategies
pub mod strategy;

/// Resource generation
pub mod generator;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use generator::{HalGenerator, ResourceGenerator};
pub use link::{Link, LinkGenerator, RequestContext};
pub use metadata::CollectionMetadata;
pub use resource::HalResource;
pub use strategy::{RouteBasedCollectionStrategy, Strategy, UrlBasedCollectionStrategy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
