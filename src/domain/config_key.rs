// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for dotted-key lookups.
//!
//! This module provides the `ConfigKey` type, a newtype wrapper around `String`
//! that knows how to split itself into path segments and how to derive the name
//! of its environment-variable fallback.

use std::fmt;

/// A dot-delimited configuration key.
///
/// A key such as `database.connection.host` can address either a single flat
/// entry stored verbatim under that name, or a path through nested mappings.
/// The key itself carries no validation beyond splitting at dots.
///
/// # Examples
///
/// ```
/// use treecfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database.host");
///
/// assert_eq!(key.as_str(), "database.host");
/// assert_eq!(key.env_var_name(), "DATABASE_HOST");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the name of the environment variable consulted when this key is
    /// absent from the tree.
    ///
    /// The key is uppercased and every `.` is replaced with `_`, so
    /// `my.test.property1` becomes `MY_TEST_PROPERTY1`.
    pub fn env_var_name(&self) -> String {
        self.0.to_uppercase().replace('.', "_")
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_from_str() {
        let key = ConfigKey::from("test.key");
        assert_eq!(key.as_str(), "test.key");
        assert_eq!(key.into_string(), "test.key");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("test.key");
        assert_eq!(format!("{}", key), "test.key");
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(
            ConfigKey::from("my.test.property1").env_var_name(),
            "MY_TEST_PROPERTY1"
        );
        assert_eq!(
            ConfigKey::from("root.family1.key19").env_var_name(),
            "ROOT_FAMILY1_KEY19"
        );
    }

    #[test]
    fn test_env_var_name_already_upper() {
        assert_eq!(ConfigKey::from("SECRET_ENV").env_var_name(), "SECRET_ENV");
    }

    #[test]
    fn test_env_var_name_keeps_underscores() {
        assert_eq!(
            ConfigKey::from("app_name.max_size").env_var_name(),
            "APP_NAME_MAX_SIZE"
        );
    }
}
