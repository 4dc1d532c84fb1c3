//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HAL collection renderer
#[derive(Parser, Debug)]
#[command(name = "hal-collection")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true, default_value = "hal.yaml")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a JSON array of objects as a HAL collection
    Render {
        /// JSON file containing an array of objects
        #[arg(short, long)]
        items: PathBuf,

        /// Collection type name to look up metadata for
        #[arg(long)]
        collection: String,

        /// Type name given to each item
        #[arg(long, default_value = "item")]
        item_type: String,

        /// Page to render
        #[arg(short, long, default_value = "1")]
        page: u64,

        /// Items per page (0 = single page)
        #[arg(long, default_value = "10")]
        per_page: usize,

        /// Render without pagination
        #[arg(long)]
        no_paginate: bool,

        /// Override the configured base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Route attributes of the current request (comma-separated name=value)
        #[arg(long)]
        attributes: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate the configuration file
    Validate,
}
