// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the errors that can occur while loading a configuration
//! document or reading typed properties out of it. All errors use `thiserror`
//! for proper error handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error type carried as the source of construction and coercion errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for configuration operations.
///
/// The first four variants are raised while building a
/// [`ConfigStore`](crate::service::ConfigStore); the rest are raised by the
/// typed accessors. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use treecfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::MissingRequiredProperty {
///         key: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    FileReadError {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The YAML document could not be converted into its JSON representation.
    #[error("Failed to convert YAML configuration to JSON: {message}")]
    FormatConversionError {
        /// The error message
        message: String,
        /// The underlying conversion error
        #[source]
        source: Option<BoxError>,
    },

    /// The format selector is not one of the supported formats.
    #[error("Unknown configuration format: '{format}' (allowed values: yaml, yml, json)")]
    UnknownFormat {
        /// The selector that was not recognized
        format: String,
    },

    /// The document could not be parsed into a mapping.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<BoxError>,
    },

    /// A required property is absent from both the tree and the environment.
    #[error("Couldn't resolve required property '{key}'")]
    MissingRequiredProperty {
        /// The key that could not be resolved
        key: String,
    },

    /// A tree value has a different type than the accessor expects.
    #[error("Property '{key}' has type {found}, expected {expected}")]
    TypeMismatch {
        /// The key being read
        key: String,
        /// The type the accessor expects
        expected: &'static str,
        /// The type found in the tree
        found: &'static str,
    },

    /// An environment value could not be parsed as the requested numeric type.
    #[error("Failed to convert env value for key '{key}' to {target_type}: {source}")]
    InvalidNumericFormat {
        /// The key being read
        key: String,
        /// The target type name
        target_type: &'static str,
        /// The underlying parsing error
        #[source]
        source: BoxError,
    },

    /// A secret could not be decoded from base64.
    #[error("Failed to decode secret property '{key}': {source}")]
    InvalidSecretEncoding {
        /// The key being read
        key: String,
        /// The underlying decoding error
        #[source]
        source: BoxError,
    },
}

impl ConfigError {
    /// Creates a `TypeMismatch` error.
    pub fn type_mismatch(key: &str, expected: &'static str, found: &'static str) -> Self {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            expected,
            found,
        }
    }

    /// Creates an `InvalidNumericFormat` error from any parse error.
    pub fn invalid_numeric<E>(key: &str, target_type: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::InvalidNumericFormat {
            key: key.to_string(),
            target_type,
            source: Box::new(err),
        }
    }

    /// Creates a `MissingRequiredProperty` error.
    pub fn missing(key: &str) -> Self {
        ConfigError::MissingRequiredProperty {
            key: key.to_string(),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_property_error() {
        let error = ConfigError::missing("test.key");
        assert_eq!(
            error.to_string(),
            "Couldn't resolve required property 'test.key'"
        );
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::type_mismatch("test.key", "boolean", "string");
        assert_eq!(
            error.to_string(),
            "Property 'test.key' has type string, expected boolean"
        );
    }

    #[test]
    fn test_invalid_numeric_format_error() {
        let parse_err = "not_a_number".parse::<i64>().unwrap_err();
        let error = ConfigError::invalid_numeric("test.key", "integer", parse_err);
        assert!(matches!(error, ConfigError::InvalidNumericFormat { .. }));
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_unknown_format_error() {
        let error = ConfigError::UnknownFormat {
            format: "toml".to_string(),
        };
        assert!(error.to_string().contains("'toml'"));
    }

    #[test]
    fn test_parse_error() {
        let error = ConfigError::ParseError {
            message: "root is not a mapping".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: root is not a mapping"
        );
    }

    #[test]
    fn test_file_read_error_keeps_source() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::FileReadError {
            path: PathBuf::from("/etc/app/config.yaml"),
            source: io_error,
        };
        assert!(error.to_string().contains("/etc/app/config.yaml"));
        assert!(error.source().is_some());
    }
}
