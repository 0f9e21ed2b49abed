// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of ports.
//!
//! This module contains the document parsers and environment sources.

pub mod env_var;
pub mod json_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

use crate::domain::{ConfigError, ConfigFormat, Result};
use crate::ports::ConfigParser;
use std::fs;
use std::path::Path;

// Re-export adapters
pub use env_var::{MapEnv, ProcessEnv};
pub use json_file::JsonParser;
#[cfg(feature = "yaml")]
pub use yaml_file::YamlParser;

/// Returns the parser for a document format.
///
/// Without the `yaml` feature, asking for a YAML parser fails with
/// `UnknownFormat`.
pub fn parser_for(format: ConfigFormat) -> Result<Box<dyn ConfigParser>> {
    match format {
        ConfigFormat::Json => Ok(Box::new(JsonParser::new())),
        #[cfg(feature = "yaml")]
        ConfigFormat::Yaml => Ok(Box::new(YamlParser::new())),
        #[cfg(not(feature = "yaml"))]
        ConfigFormat::Yaml => Err(ConfigError::UnknownFormat {
            format: format.to_string(),
        }),
    }
}

/// Reads a configuration file into memory.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| ConfigError::FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "key: value").unwrap();

        let bytes = read_config_file(temp_file.path()).unwrap();
        assert_eq!(bytes, b"key: value");
    }

    #[test]
    fn test_read_config_file_large() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let line = "padding: value\n";
        let content = line.repeat(11 * 1024 * 1024 / line.len());
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let bytes = read_config_file(temp_file.path()).unwrap();
        assert_eq!(bytes.len(), content.len());
    }

    #[test]
    fn test_read_config_file_nonexistent() {
        let err = read_config_file("/nonexistent/path/to/config.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileReadError { .. }));
    }

    #[test]
    fn test_parser_for_json() {
        let parser = parser_for(ConfigFormat::Json).unwrap();
        assert_eq!(parser.format(), ConfigFormat::Json);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_parser_for_yaml() {
        let parser = parser_for(ConfigFormat::Yaml).unwrap();
        assert_eq!(parser.format(), ConfigFormat::Yaml);
    }
}
