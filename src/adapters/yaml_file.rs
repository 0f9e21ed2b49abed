// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document adapter.
//!
//! This module provides the YAML parser. A YAML document is first converted to
//! its JSON equivalent and then built into a tree the same way a JSON document
//! is, so both formats produce identical trees for identical content.

use crate::adapters::json_file::tree_from_json;
use crate::domain::{ConfigError, ConfigFormat, ConfigTree, Result};
use crate::ports::ConfigParser;

/// YAML parser implementation.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::YamlParser;
/// use treecfg::domain::{ConfigKey, ConfigNode};
/// use treecfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let tree = parser.parse(yaml_content.as_bytes()).unwrap();
/// assert_eq!(
///     tree.resolve(&ConfigKey::from("database.host")),
///     Some(&ConfigNode::from("localhost"))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML document into its JSON representation.
    ///
    /// Merge keys (`<<: *anchor`) are expanded before conversion. Fails when
    /// the YAML is malformed or uses constructs JSON cannot express, such as a
    /// mapping with a sequence as a key.
    pub fn to_json(content: &[u8]) -> Result<serde_json::Value> {
        let mut yaml: serde_yaml::Value =
            serde_yaml::from_slice(content).map_err(|e| ConfigError::FormatConversionError {
                message: format!("invalid YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        yaml.apply_merge().map_err(|e| ConfigError::FormatConversionError {
            message: format!("invalid YAML merge key: {}", e),
            source: Some(Box::new(e)),
        })?;

        serde_json::to_value(yaml).map_err(|e| ConfigError::FormatConversionError {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &[u8]) -> Result<ConfigTree> {
        tree_from_json(Self::to_json(content)?)
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Yaml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConfigKey, ConfigNode};

    fn parse(content: &str) -> Result<ConfigTree> {
        YamlParser::new().parse(content.as_bytes())
    }

    #[test]
    fn test_yaml_parser_simple() {
        let tree = parse("key: value").unwrap();
        assert_eq!(tree.get("key"), Some(&ConfigNode::from("value")));
    }

    #[test]
    fn test_yaml_parser_deeply_nested() {
        let yaml = r#"
app:
  database:
    connection:
      host: localhost
      port: 5432
"#;
        let tree = parse(yaml).unwrap();

        assert_eq!(
            tree.resolve(&ConfigKey::from("app.database.connection.host")),
            Some(&ConfigNode::from("localhost"))
        );
        assert_eq!(
            tree.resolve(&ConfigKey::from("app.database.connection.port")),
            Some(&ConfigNode::Number(5432.0))
        );
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let yaml = r#"
string_value: hello
number_value: 42
float_value: 212.212
bool_value: true
null_value: null
servers:
  - server1
  - server2
"#;
        let tree = parse(yaml).unwrap();

        assert_eq!(tree.get("string_value"), Some(&ConfigNode::from("hello")));
        assert_eq!(tree.get("number_value"), Some(&ConfigNode::Number(42.0)));
        assert_eq!(tree.get("float_value"), Some(&ConfigNode::Number(212.212)));
        assert_eq!(tree.get("bool_value"), Some(&ConfigNode::Bool(true)));
        assert_eq!(tree.get("null_value"), Some(&ConfigNode::Null));
        assert_eq!(
            tree.get("servers"),
            Some(&ConfigNode::Sequence(vec![
                ConfigNode::from("server1"),
                ConfigNode::from("server2")
            ]))
        );
    }

    #[test]
    fn test_yaml_parser_quoted_number_stays_string() {
        let tree = parse("port: \"8080\"").unwrap();
        assert_eq!(tree.get("port"), Some(&ConfigNode::from("8080")));
    }

    #[test]
    fn test_yaml_parser_dotted_key_stays_flat() {
        let tree = parse("another.simple.prop: 4").unwrap();
        assert_eq!(tree.get("another.simple.prop"), Some(&ConfigNode::Number(4.0)));
    }

    #[test]
    fn test_yaml_parser_applies_merge_keys() {
        let yaml = r#"
defaults: &defaults
  timeout: 30
  retries: 2
service:
  <<: *defaults
  name: api
  retries: 5
"#;
        let tree = parse(yaml).unwrap();

        assert_eq!(
            tree.resolve(&ConfigKey::from("service.timeout")),
            Some(&ConfigNode::Number(30.0))
        );
        assert_eq!(
            tree.resolve(&ConfigKey::from("service.name")),
            Some(&ConfigNode::from("api"))
        );
        // Explicit entries override merged ones
        assert_eq!(
            tree.resolve(&ConfigKey::from("service.retries")),
            Some(&ConfigNode::Number(5.0))
        );
        assert_eq!(tree.resolve(&ConfigKey::from("service.<<")), None);
    }

    #[test]
    fn test_yaml_parser_invalid_merge_value() {
        let err = parse("service:\n  <<: plain\n  name: api\n").unwrap_err();
        assert!(matches!(err, ConfigError::FormatConversionError { .. }));
    }

    #[test]
    fn test_yaml_parser_yaml11_booleans_stay_strings() {
        let tree = parse("a: yes\nb: on\nc: true\n").unwrap();
        assert_eq!(tree.get("a"), Some(&ConfigNode::from("yes")));
        assert_eq!(tree.get("b"), Some(&ConfigNode::from("on")));
        assert_eq!(tree.get("c"), Some(&ConfigNode::Bool(true)));
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let err = parse("invalid: yaml: content:").unwrap_err();
        assert!(matches!(err, ConfigError::FormatConversionError { .. }));
    }

    #[test]
    fn test_yaml_parser_non_string_key_fails_conversion() {
        let err = parse("? [a, b]\n: value\n").unwrap_err();
        assert!(matches!(err, ConfigError::FormatConversionError { .. }));
    }

    #[test]
    fn test_yaml_parser_root_must_be_mapping() {
        let err = parse("- one\n- two\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_yaml_parser_null_document() {
        let tree = parse("~").unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::new();
        let extensions = parser.supported_extensions();
        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains(&"yaml"));
        assert!(extensions.contains(&"yml"));
    }
}
