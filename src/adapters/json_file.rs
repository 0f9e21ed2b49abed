// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document adapter.
//!
//! This module provides the JSON parser. Every document, YAML included, passes
//! through its JSON representation before becoming a [`ConfigTree`].

use crate::domain::{ConfigError, ConfigFormat, ConfigNode, ConfigTree, Result};
use crate::ports::ConfigParser;
use serde_json::Value;

/// JSON parser implementation.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::JsonParser;
/// use treecfg::domain::{ConfigKey, ConfigNode};
/// use treecfg::ports::ConfigParser;
///
/// let parser = JsonParser::new();
/// let tree = parser.parse(br#"{"database": {"port": 5432}}"#).unwrap();
/// assert_eq!(
///     tree.resolve(&ConfigKey::from("database.port")),
///     Some(&ConfigNode::Number(5432.0))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &[u8]) -> Result<ConfigTree> {
        let value: Value = serde_json::from_slice(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
            source: Some(Box::new(e)),
        })?;

        tree_from_json(value)
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}

/// Builds a tree from a JSON document root.
///
/// The root must be an object. A `null` root (an empty document) gives an
/// empty tree.
pub(crate) fn tree_from_json(root: Value) -> Result<ConfigTree> {
    match root {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| Ok((key, node_from_json(value)?)))
            .collect(),
        Value::Null => Ok(ConfigTree::new()),
        other => Err(ConfigError::ParseError {
            message: format!(
                "document root must be a mapping, found {}",
                json_type_name(&other)
            ),
            source: None,
        }),
    }
}

fn node_from_json(value: Value) -> Result<ConfigNode> {
    Ok(match value {
        Value::Null => ConfigNode::Null,
        Value::Bool(b) => ConfigNode::Bool(b),
        Value::Number(n) => {
            let n = n.as_f64().ok_or_else(|| ConfigError::ParseError {
                message: format!("number {} is not representable as f64", n),
                source: None,
            })?;
            ConfigNode::Number(n)
        }
        Value::String(s) => ConfigNode::String(s),
        Value::Array(items) => ConfigNode::Sequence(
            items
                .into_iter()
                .map(node_from_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(_) => ConfigNode::Nested(tree_from_json(value)?),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
