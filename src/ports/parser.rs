// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! turning the raw bytes of a configuration document into a [`ConfigTree`].

use crate::domain::{ConfigFormat, ConfigTree, Result};

/// A trait for parsing configuration documents.
///
/// Parsers keep the nested structure of the document. For example, a YAML
/// document like:
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// becomes a tree with one top-level entry `database` holding a nested tree
/// with `host` and `port`. Dotted keys in the document stay single entries.
///
/// # Examples
///
/// ```rust
/// use treecfg::ports::ConfigParser;
/// use treecfg::domain::{ConfigFormat, ConfigTree, Result};
///
/// struct FixedParser;
///
/// impl ConfigParser for FixedParser {
///     fn parse(&self, _content: &[u8]) -> Result<ConfigTree> {
///         Ok(ConfigTree::new().with_entry("key", "value"))
///     }
///
///     fn format(&self) -> ConfigFormat {
///         ConfigFormat::Json
///     }
/// }
///
/// let tree = FixedParser.parse(b"").unwrap();
/// assert_eq!(tree.len(), 1);
/// ```
pub trait ConfigParser {
    /// Parses document content into a configuration tree.
    ///
    /// The root of the document must be a mapping.
    fn parse(&self, content: &[u8]) -> Result<ConfigTree>;

    /// Returns the format this parser reads.
    fn format(&self) -> ConfigFormat;

    /// Returns the file extensions supported by this parser.
    fn supported_extensions(&self) -> &[&str] {
        self.format().extensions()
    }
}
