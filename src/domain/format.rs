// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document format selector.

use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The format of a configuration document.
///
/// # Examples
///
/// ```
/// use treecfg::domain::ConfigFormat;
///
/// let format: ConfigFormat = "yml".parse().unwrap();
/// assert_eq!(format, ConfigFormat::Yaml);
/// assert!("toml".parse::<ConfigFormat>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// YAML, converted to JSON before building the tree.
    Yaml,
    /// JSON.
    Json,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    ///
    /// Fails with `UnknownFormat` when the path has no extension or an
    /// unsupported one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    /// Returns the file extensions associated with this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Yaml => &["yaml", "yml"],
            ConfigFormat::Json => &["json"],
        }
    }

    /// Returns the default file name used in the OS configuration directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "config.yaml",
            ConfigFormat::Json => "config.json",
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => write!(f, "yaml"),
            ConfigFormat::Json => write!(f, "json"),
        }
    }
}
