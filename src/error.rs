//! Error types for hal-collection
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for hal-collection
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Strategy Errors
    // ============================================================================
    #[error("Unexpected metadata of type {actual} was mapped to {strategy} (expects {expected})")]
    UnexpectedMetadataType {
        actual: String,
        strategy: String,
        expected: String,
    },

    #[error(
        "{strategy} is unable to create a resource for collection of type \"{instance}\"; not a Traversable"
    )]
    InvalidCollection { instance: String, strategy: String },

    // ============================================================================
    // Collaborator Errors
    // ============================================================================
    #[error("No metadata registered for collection of type \"{type_name}\"")]
    MetadataNotFound { type_name: String },

    #[error("Route '{route}' is not registered")]
    RouteNotFound { route: String },

    #[error("Missing parameter '{param}' required by route '{route}'")]
    MissingRouteParameter { route: String, param: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an unexpected metadata type error
    pub fn unexpected_metadata(
        actual: impl Into<String>,
        strategy: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::UnexpectedMetadataType {
            actual: actual.into(),
            strategy: strategy.into(),
            expected: expected.into(),
        }
    }

    /// Create an invalid collection error
    pub fn invalid_collection(instance: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self::InvalidCollection {
            instance: instance.into(),
            strategy: strategy.into(),
        }
    }

    /// Create a metadata-not-found error
    pub fn metadata_not_found(type_name: impl Into<String>) -> Self {
        Self::MetadataNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create a route-not-found error
    pub fn route_not_found(route: impl Into<String>) -> Self {
        Self::RouteNotFound {
            route: route.into(),
        }
    }

    /// Create a missing route parameter error
    pub fn missing_route_param(route: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingRouteParameter {
            route: route.into(),
            param: param.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error signals a server-side misconfiguration rather than
    /// a problem with the incoming request
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedMetadataType { .. }
                | Error::InvalidCollection { .. }
                | Error::MetadataNotFound { .. }
                | Error::RouteNotFound { .. }
                | Error::Config { .. }
        )
    }
}

/// Result type alias for hal-collection
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unexpected_metadata(
            "UrlBasedCollectionMetadata",
            "RouteBasedCollectionStrategy",
            "RouteBasedCollectionMetadata",
        );
        assert_eq!(
            err.to_string(),
            "Unexpected metadata of type UrlBasedCollectionMetadata was mapped to \
             RouteBasedCollectionStrategy (expects RouteBasedCollectionMetadata)"
        );

        let err = Error::invalid_collection("Book", "UrlBasedCollectionStrategy");
        assert_eq!(
            err.to_string(),
            "UrlBasedCollectionStrategy is unable to create a resource for collection of type \
             \"Book\"; not a Traversable"
        );

        let err = Error::missing_route_param("books", "page");
        assert_eq!(
            err.to_string(),
            "Missing parameter 'page' required by route 'books'"
        );
    }

    #[test]
    fn test_is_configuration_error() {
        assert!(Error::unexpected_metadata("a", "b", "c").is_configuration_error());
        assert!(Error::invalid_collection("a", "b").is_configuration_error());
        assert!(Error::route_not_found("books").is_configuration_error());
        assert!(Error::config("bad").is_configuration_error());

        assert!(!Error::missing_route_param("books", "id").is_configuration_error());
        assert!(!Error::Other("x".to_string()).is_configuration_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
