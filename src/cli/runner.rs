//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::collection::{ListCollection, Paginator, Record};
use crate::config::{load_config, HalConfig};
use crate::error::{Error, Result, ResultExt};
use crate::generator::ResourceGenerator;
use crate::metadata::{CollectionDescriptor, CollectionMetadata};
use crate::types::{JsonValue, ParamMap};
use std::fs;
use tracing::info;

/// Options for rendering one collection
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Collection type name
    pub collection: String,
    /// Type name given to each item
    pub item_type: String,
    /// Page to render
    pub page: u64,
    /// Items per page
    pub per_page: usize,
    /// Render without pagination
    pub paginate: bool,
    /// Base URL override
    pub base_url: Option<String>,
    /// Route attributes matched for the current request
    pub attributes: ParamMap,
}

/// Parse `name=value` pairs separated by commas
pub fn parse_attributes(input: &str) -> Result<ParamMap> {
    input
        .split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| {
                    Error::Other(format!("Invalid attribute '{pair}', expected name=value"))
                })
        })
        .collect()
}

/// Render a JSON array as a HAL collection using `config`
pub fn render_items(
    config: &HalConfig,
    items: JsonValue,
    options: &RenderOptions,
) -> Result<JsonValue> {
    let JsonValue::Array(values) = items else {
        return Err(Error::Other("Items must be a JSON array".to_string()));
    };
    let records = values
        .into_iter()
        .map(|value| Record::from_value(options.item_type.clone(), value))
        .collect::<Result<Vec<_>>>()?;

    let generator = config.generator()?;
    let mut request = config.request_context();
    if let Some(base_url) = &options.base_url {
        request.base_url = Some(base_url.clone());
    }
    request.attributes.extend(options.attributes.clone());

    let resource = if options.paginate {
        let paginator = Paginator::new(options.collection.clone(), records)
            .with_items_per_page(options.per_page)
            .with_current_page(options.page);
        generator.from_object(&paginator, &request)?
    } else {
        let list = ListCollection::new(options.collection.clone(), records);
        generator.from_object(&list, &request)?
    };

    resource.to_json()
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Render {
                items,
                collection,
                item_type,
                page,
                per_page,
                no_paginate,
                base_url,
                attributes,
                pretty,
            } => {
                let config = load_config(&self.cli.config)?;
                let content = fs::read_to_string(items)
                    .with_context(|| format!("Failed to read items file '{}'", items.display()))?;
                let items: JsonValue = serde_json::from_str(&content)?;
                let attributes = attributes
                    .as_deref()
                    .map(parse_attributes)
                    .transpose()?
                    .unwrap_or_default();

                let options = RenderOptions {
                    collection: collection.clone(),
                    item_type: item_type.clone(),
                    page: *page,
                    per_page: *per_page,
                    paginate: !no_paginate,
                    base_url: base_url.clone(),
                    attributes,
                };
                let output = render_items(&config, items, &options)?;

                let text = if *pretty {
                    serde_json::to_string_pretty(&output)?
                } else {
                    serde_json::to_string(&output)?
                };
                println!("{text}");
                Ok(())
            }
            Commands::Validate => self.validate(),
        }
    }

    fn validate(&self) -> Result<()> {
        let config = load_config(&self.cli.config)?;
        info!(path = %self.cli.config.display(), "Configuration is valid");

        println!("Routes ({}):", config.routes.len());
        for (name, template) in &config.routes {
            println!("  {name:<24} {template}");
        }

        println!("Collections ({}):", config.metadata.len());
        for metadata in &config.metadata {
            let target = match metadata {
                CollectionMetadata::RouteBased(m) => format!("route {}", m.route),
                CollectionMetadata::UrlBased(m) => format!("url {}", m.url),
            };
            println!(
                "  {:<24} {} ({} pagination on '{}')",
                metadata.collection_class(),
                target,
                metadata.pagination_param_type(),
                metadata.pagination_param()
            );
        }
        Ok(())
    }
}
