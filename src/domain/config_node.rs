// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory configuration tree and dotted-key resolution.
//!
//! A loaded document becomes a [`ConfigTree`]: a mapping from string keys to
//! [`ConfigNode`]s, where a node is either a scalar, a sequence, null, or a
//! nested tree. The tree is built once and never mutated afterwards.

use crate::domain::ConfigKey;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single value in a configuration tree.
///
/// All numbers are stored as `f64`, the way a JSON document represents them.
/// Formatting uses the shortest digits that round-trip, switching to exponent
/// form when the decimal exponent is below -4 or at least 6.
///
/// # Examples
///
/// ```
/// use treecfg::domain::ConfigNode;
///
/// assert_eq!(ConfigNode::from(3.0).to_string(), "3");
/// assert_eq!(ConfigNode::from(212.212).to_string(), "212.212");
/// assert_eq!(ConfigNode::from(1e21).to_string(), "1e+21");
/// assert_eq!(ConfigNode::from(true).to_string(), "true");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
    /// An explicit null.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// A string scalar.
    String(String),
    /// A list of values.
    Sequence(Vec<ConfigNode>),
    /// A nested mapping.
    Nested(ConfigTree),
}

impl ConfigNode {
    /// Returns a short name for the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigNode::Null => "null",
            ConfigNode::Bool(_) => "boolean",
            ConfigNode::Number(_) => "number",
            ConfigNode::String(_) => "string",
            ConfigNode::Sequence(_) => "sequence",
            ConfigNode::Nested(_) => "mapping",
        }
    }

    /// Returns the node if it can be handed to a caller as a resolution result.
    ///
    /// Mappings and nulls collapse to `None`.
    pub fn as_leaf(&self) -> Option<&ConfigNode> {
        match self {
            ConfigNode::Null | ConfigNode::Nested(_) => None,
            leaf => Some(leaf),
        }
    }

    /// Returns the nested tree if this node is a mapping.
    pub fn as_tree(&self) -> Option<&ConfigTree> {
        match self {
            ConfigNode::Nested(tree) => Some(tree),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigNode::Null => write!(f, "null"),
            ConfigNode::Bool(b) => write!(f, "{}", b),
            ConfigNode::Number(n) => fmt_number(*n, f),
            ConfigNode::String(s) => write!(f, "{}", s),
            ConfigNode::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConfigNode::Nested(tree) => {
                write!(f, "map[")?;
                for (i, (key, value)) in tree.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "]")
            }
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        return write!(f, "NaN");
    }
    if n.is_infinite() {
        return write!(f, "{}Inf", if n > 0.0 { '+' } else { '-' });
    }
    if n == 0.0 {
        return write!(f, "{}", n);
    }

    let sci = format!("{:e}", n);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => return write!(f, "{}", n),
    };

    if (-4..6).contains(&exp) {
        write!(f, "{}", n)
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

impl From<bool> for ConfigNode {
    fn from(b: bool) -> Self {
        ConfigNode::Bool(b)
    }
}

impl From<f64> for ConfigNode {
    fn from(n: f64) -> Self {
        ConfigNode::Number(n)
    }
}

impl From<&str> for ConfigNode {
    fn from(s: &str) -> Self {
        ConfigNode::String(s.to_string())
    }
}

impl From<String> for ConfigNode {
    fn from(s: String) -> Self {
        ConfigNode::String(s)
    }
}

impl From<ConfigTree> for ConfigNode {
    fn from(tree: ConfigTree) -> Self {
        ConfigNode::Nested(tree)
    }
}

impl From<Vec<ConfigNode>> for ConfigNode {
    fn from(items: Vec<ConfigNode>) -> Self {
        ConfigNode::Sequence(items)
    }
}

/// A mapping from string keys to configuration nodes.
///
/// Keys may contain dots: a document can store `another.simple.prop` as a
/// single flat entry next to ordinary nested mappings.
///
/// # Examples
///
/// ```
/// use treecfg::domain::{ConfigKey, ConfigNode, ConfigTree};
///
/// let tree = ConfigTree::new().with_entry(
///     "root",
///     ConfigTree::new().with_entry("family1", ConfigTree::new().with_entry("key1", "test11")),
/// );
///
/// let value = tree.resolve(&ConfigKey::from("root.family1.key1"));
/// assert_eq!(value, Some(&ConfigNode::from("test11")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigTree {
    entries: BTreeMap<String, ConfigNode>,
}

impl ConfigTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tree with one more top-level entry.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<ConfigNode>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Returns the top-level entry stored verbatim under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.entries.get(key)
    }

    /// Returns the top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a dotted key to a leaf value.
    ///
    /// A verbatim top-level match always wins, even when it is a mapping (in
    /// which case the result is `None`). Only when there is no verbatim match
    /// is the key split at its first dot and the remainder resolved inside the
    /// nested mapping named by the prefix.
    pub fn resolve(&self, key: &ConfigKey) -> Option<&ConfigNode> {
        self.resolve_str(key.as_str())
    }

    fn resolve_str(&self, key: &str) -> Option<&ConfigNode> {
        if let Some(node) = self.entries.get(key) {
            return node.as_leaf();
        }

        let (prefix, suffix) = key.split_once('.')?;
        self.entries
            .get(prefix)
            .and_then(ConfigNode::as_tree)
            .and_then(|nested| nested.resolve_str(suffix))
    }
}

impl FromIterator<(String, ConfigNode)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (String, ConfigNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
