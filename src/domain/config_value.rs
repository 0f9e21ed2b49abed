// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved configuration values and their type coercions.
//!
//! A lookup yields a [`ConfigValue`] that remembers where it came from. Values
//! found in the tree keep their native type and are coerced strictly; values
//! found in the environment are always strings and are parsed.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::ConfigNode;
use std::fmt;

/// A value produced by a lookup, before coercion to the caller's type.
///
/// # Examples
///
/// ```
/// use treecfg::domain::{ConfigNode, ConfigValue};
///
/// let from_tree = ConfigValue::Tree(ConfigNode::from(122.0));
/// assert_eq!(from_tree.as_i64("port").unwrap(), 122);
///
/// let from_env = ConfigValue::Env("8".to_string());
/// assert_eq!(from_env.as_i64("port").unwrap(), 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// A leaf found in the configuration tree.
    Tree(ConfigNode),
    /// A string read from an environment variable.
    Env(String),
}

impl ConfigValue {
    /// Formats the value as a string.
    ///
    /// Tree scalars use their natural representation: numbers without
    /// unnecessary decoration and booleans as `true`/`false`.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Converts the value to a boolean.
    ///
    /// Tree values must already be booleans. Environment values are `true`
    /// exactly when they equal `"true"` ignoring ASCII case; anything else is
    /// `false`.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ConfigValue::Tree(ConfigNode::Bool(b)) => Ok(*b),
            ConfigValue::Tree(other) => Err(ConfigError::type_mismatch(
                key,
                "boolean",
                other.type_name(),
            )),
            ConfigValue::Env(s) => Ok(s.eq_ignore_ascii_case("true")),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// Tree numbers are truncated toward zero (saturating at the `i64`
    /// bounds). Environment values must parse as a decimal integer.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Tree(node) => Ok(Self::tree_number(node, key)? as i64),
            ConfigValue::Env(s) => s
                .parse::<i64>()
                .map_err(|e| ConfigError::invalid_numeric(key, "integer", e)),
        }
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Tree(node) => Self::tree_number(node, key),
            ConfigValue::Env(s) => s
                .parse::<f64>()
                .map_err(|e| ConfigError::invalid_numeric(key, "float64", e)),
        }
    }

    /// Converts the value to an `f32`.
    ///
    /// Tree numbers are narrowed from `f64`.
    pub fn as_f32(&self, key: &str) -> Result<f32> {
        match self {
            ConfigValue::Tree(node) => Ok(Self::tree_number(node, key)? as f32),
            ConfigValue::Env(s) => s
                .parse::<f32>()
                .map_err(|e| ConfigError::invalid_numeric(key, "float32", e)),
        }
    }

    /// Returns the raw string of a value that must be a string.
    ///
    /// Used for secrets, where a tree value of any other type is rejected.
    pub fn as_str_strict(&self, key: &str) -> Result<&str> {
        match self {
            ConfigValue::Tree(ConfigNode::String(s)) | ConfigValue::Env(s) => Ok(s),
            ConfigValue::Tree(other) => Err(ConfigError::type_mismatch(
                key,
                "string",
                other.type_name(),
            )),
        }
    }

    fn tree_number(node: &ConfigNode, key: &str) -> Result<f64> {
        match node {
            ConfigNode::Number(n) => Ok(*n),
            other => Err(ConfigError::type_mismatch(key, "number", other.type_name())),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Tree(node) => write!(f, "{}", node),
            ConfigValue::Env(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(node: impl Into<ConfigNode>) -> ConfigValue {
        ConfigValue::Tree(node.into())
    }

    fn env(s: &str) -> ConfigValue {
        ConfigValue::Env(s.to_string())
    }

    #[test]
    fn test_as_string_natural_formatting() {
        assert_eq!(tree("test11").as_string(), "test11");
        assert_eq!(tree(122.0).as_string(), "122");
        assert_eq!(tree(212.212).as_string(), "212.212");
        assert_eq!(tree(false).as_string(), "false");
        assert_eq!(env("  spaces  ").as_string(), "  spaces  ");
    }

    #[test]
    fn test_as_bool_tree_is_strict() {
        assert!(tree(true).as_bool("k").unwrap());
        assert!(!tree(false).as_bool("k").unwrap());

        let err = tree("true").as_bool("k").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TypeMismatch {
                expected: "boolean",
                found: "string",
                ..
            }
        ));
    }

    #[test]
    fn test_as_bool_env_case_insensitive() {
        for val in ["true", "True", "TRUE", "tRuE"] {
            assert!(env(val).as_bool("k").unwrap(), "Failed for value: {}", val);
        }
        for val in ["false", "yes", "1", "on", "maybe"] {
            assert!(!env(val).as_bool("k").unwrap(), "Failed for value: {}", val);
        }
    }

    #[test]
    fn test_as_i64_truncates_tree_numbers() {
        assert_eq!(tree(122.0).as_i64("k").unwrap(), 122);
        assert_eq!(tree(212.912).as_i64("k").unwrap(), 212);
        assert_eq!(tree(-3.7).as_i64("k").unwrap(), -3);
    }

    #[test]
    fn test_as_i64_env() {
        assert_eq!(env("8").as_i64("k").unwrap(), 8);
        assert_eq!(env("-42").as_i64("k").unwrap(), -42);

        let err = env("3.14").as_i64("k").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumericFormat {
                target_type: "integer",
                ..
            }
        ));
    }

    #[test]
    fn test_numeric_tree_type_mismatch() {
        assert!(matches!(
            tree("122").as_i64("k").unwrap_err(),
            ConfigError::TypeMismatch { .. }
        ));
        assert!(matches!(
            tree(true).as_f64("k").unwrap_err(),
            ConfigError::TypeMismatch { .. }
        ));
    }

    #[test]
    fn test_as_f32_and_f64() {
        assert_eq!(tree(212.212).as_f64("k").unwrap(), 212.212);
        assert_eq!(tree(212.212).as_f32("k").unwrap(), 212.212_f32);
        assert_eq!(env("2.2").as_f32("k").unwrap(), 2.2_f32);
        assert_eq!(env("2.2").as_f64("k").unwrap(), 2.2);
        assert!(env("abc").as_f64("k").is_err());
        assert!(env("").as_f32("k").is_err());
    }

    #[test]
    fn test_as_str_strict() {
        assert_eq!(tree("c2VjcmV0").as_str_strict("k").unwrap(), "c2VjcmV0");
        assert_eq!(env("abc").as_str_strict("k").unwrap(), "abc");
        assert!(tree(1.0).as_str_strict("k").is_err());
    }
}
