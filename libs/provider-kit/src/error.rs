//! Error types for provider assembly and controller setup.

use thiserror::Error;

/// Errors raised while finalizing a provider configuration.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The embedded provider schema could not be parsed.
    #[error("invalid provider schema: {source}")]
    Schema {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The embedded provider metadata could not be parsed.
    #[error("invalid provider metadata: {source}")]
    Metadata {
        /// The underlying decoding or YAML error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An include-list entry is not a valid regular expression.
    #[error("invalid include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        /// The offending pattern
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A resource configurator targets a resource that was not resolved.
    #[error("resource '{name}' is configured but was not resolved from the schema")]
    UnknownResource {
        /// Name of the resource the configurator was registered for
        name: String,
    },
}

impl ProviderError {
    /// Create a metadata error wrapping its cause
    pub fn metadata(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Metadata {
            source: source.into(),
        }
    }
}

/// Errors raised by the in-memory controller manager.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// A controller with the same name is already registered.
    #[error("controller '{name}' is already registered")]
    Duplicate {
        /// Name of the controller
        name: String,
    },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_message() {
        let err = ProviderError::metadata("unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "invalid provider metadata: unexpected end of stream"
        );
    }

    #[test]
    fn test_duplicate_error_message() {
        let err = ControllerError::Duplicate {
            name: "managed/acl.redis.io/v1alpha1, Kind=Role".to_owned(),
        };
        assert!(err.to_string().contains("already registered"));
        assert!(err.to_string().contains("Kind=Role"));
    }
}
