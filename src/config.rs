//! Configuration loading
//!
//! A YAML document declares the named routes available for link generation
//! and the collection metadata keyed by collection type name:
//!
//! ```yaml
//! base_url: https://api.example.com
//! routes:
//!   books: /books[/{page}]
//! metadata:
//!   - kind: route_based_collection
//!     collection_class: BookCollection
//!     collection_relation: books
//!     route: books
//!     pagination_param_type: placeholder
//! ```

use crate::error::{Error, Result};
use crate::generator::HalGenerator;
use crate::link::{LinkGenerator, RequestContext, RouteTable};
use crate::metadata::{CollectionMetadata, MetadataMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Route and metadata configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HalConfig {
    /// Scheme and host prefixed to routed links
    #[serde(default)]
    pub base_url: Option<String>,

    /// Route name → path template
    #[serde(default)]
    pub routes: IndexMap<String, String>,

    /// Collection metadata entries
    #[serde(default)]
    pub metadata: Vec<CollectionMetadata>,
}

impl HalConfig {
    /// Check cross references between metadata and routes
    pub fn validate(&self) -> Result<()> {
        let mut seen = Vec::with_capacity(self.metadata.len());
        for entry in &self.metadata {
            let class = match entry {
                CollectionMetadata::RouteBased(m) => {
                    if !self.routes.contains_key(&m.route) {
                        return Err(Error::config(format!(
                            "Collection '{}' refers to unknown route '{}'",
                            m.collection_class, m.route
                        )));
                    }
                    &m.collection_class
                }
                CollectionMetadata::UrlBased(m) => &m.collection_class,
            };
            if seen.contains(&class) {
                return Err(Error::config(format!(
                    "Metadata for collection class '{class}' is declared more than once"
                )));
            }
            seen.push(class);
        }
        Ok(())
    }

    /// Build the route table
    pub fn route_table(&self) -> RouteTable {
        self.routes
            .iter()
            .fold(RouteTable::new(), |table, (name, template)| {
                table.with_route(name.clone(), template.clone())
            })
    }

    /// Build the metadata registry
    pub fn metadata_map(&self) -> Result<MetadataMap> {
        MetadataMap::from_entries(self.metadata.iter().cloned())
    }

    /// Request context carrying the configured base URL
    pub fn request_context(&self) -> RequestContext {
        match &self.base_url {
            Some(base) => RequestContext::new().with_base_url(base.clone()),
            None => RequestContext::new(),
        }
    }

    /// Wire a resource generator from this configuration
    pub fn generator(&self) -> Result<HalGenerator> {
        Ok(HalGenerator::new(
            self.metadata_map()?,
            LinkGenerator::new(self.route_table()),
        ))
    }
}

/// Load and validate a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<HalConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    debug!(path = %path.display(), "Loaded configuration file");
    load_config_from_str(&content)
}

/// Parse and validate a configuration document
pub fn load_config_from_str(yaml: &str) -> Result<HalConfig> {
    let config: HalConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{Paginator, Record};
    use crate::generator::ResourceGenerator;
    use crate::metadata::{CollectionDescriptor, PaginationParamType};
    use serde_json::json;
    use std::io::Write;

    const CONFIG: &str = r#"
base_url: https://api.example.com
routes:
  books: /books[/{page}]
metadata:
  - kind: route_based_collection
    collection_class: BookCollection
    collection_relation: books
    route: books
    pagination_param_type: placeholder
  - kind: url_based_collection
    collection_class: AuthorCollection
    collection_relation: authors
    url: https://api.example.com/authors?sort=name
"#;

    #[test]
    fn test_load_config_from_str() {
        let config = load_config_from_str(CONFIG).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.metadata.len(), 2);
        assert_eq!(
            config.metadata[0].pagination_param_type(),
            PaginationParamType::Placeholder
        );
        assert_eq!(config.metadata[1].pagination_param(), "page");
    }

    #[test]
    fn test_empty_config() {
        let config = load_config_from_str("{}").unwrap();
        assert!(config.routes.is_empty());
        assert!(config.metadata.is_empty());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_unknown_route_rejected() {
        let yaml = r#"
metadata:
  - kind: route_based_collection
    collection_class: BookCollection
    collection_relation: books
    route: books
"#;
        let err = load_config_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("unknown route 'books'"));
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let yaml = r#"
metadata:
  - kind: url_based_collection
    collection_class: BookCollection
    collection_relation: books
    url: /books
  - kind: url_based_collection
    collection_class: BookCollection
    collection_relation: books
    url: /v2/books
"#;
        let err = load_config_from_str(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = load_config_from_str("routes: [").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_config_from_file_and_generate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        let generator = config.generator().unwrap();
        let request = config.request_context();

        let books: Vec<Record> = (1..=3)
            .map(|id| Record::from_value("Book", json!({ "id": id })).unwrap())
            .collect();
        let paginator = Paginator::new("BookCollection", books).with_items_per_page(1);

        let resource = generator.from_object(&paginator, &request).unwrap();
        assert_eq!(
            resource.link("self").unwrap().href,
            "https://api.example.com/books"
        );
        assert_eq!(
            resource.link("next").unwrap().href,
            "https://api.example.com/books/2"
        );
        assert_eq!(
            resource.link("last").unwrap().href,
            "https://api.example.com/books/3"
        );
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/hal.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
