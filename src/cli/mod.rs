//! CLI module
//!
//! Command-line interface for rendering collections.
//!
//! # Commands
//!
//! - `render` - Render a JSON array as a paginated HAL collection
//! - `validate` - Validate a configuration file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::{parse_attributes, render_items, RenderOptions, Runner};
