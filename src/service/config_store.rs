// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration store.
//!
//! This module provides [`ConfigStore`], which owns a loaded configuration
//! tree and answers typed lookups against it, falling back to the environment
//! when a key is absent from the tree.

use crate::adapters;
use crate::domain::{
    ConfigError, ConfigFormat, ConfigKey, ConfigNode, ConfigTree, ConfigValue, Result,
};
use crate::ports::EnvironmentSource;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use directories::ProjectDirs;
use std::fmt;
use std::path::Path;

/// A loaded configuration document with typed, environment-aware accessors.
///
/// Every accessor resolves its key in the same order:
///
/// 1. the tree, trying the key verbatim first and then as a nested path;
/// 2. the environment variable named by uppercasing the key and replacing
///    dots with underscores (`db.host` -> `DB_HOST`), ignoring empty values;
/// 3. the caller's default (`get_*_or`), the type's zero value (`get_*`), or
///    a `MissingRequiredProperty` error (`require_*`).
///
/// The tree is never modified after construction. The environment is read on
/// every call and never cached.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::MapEnv;
/// use treecfg::domain::ConfigFormat;
/// use treecfg::service::ConfigStore;
///
/// # fn main() -> treecfg::domain::Result<()> {
/// let yaml = b"server:\n  port: 8080\n";
/// let store = ConfigStore::builder()
///     .with_bytes(yaml, ConfigFormat::Yaml)?
///     .with_env_source(MapEnv::new().with_var("SERVER_HOST", "example.com"))
///     .build()?;
///
/// assert_eq!(store.get_int("server.port")?, 8080);
/// assert_eq!(store.get_string("server.host")?, "example.com");
/// assert_eq!(store.get_string_or("server.name", "api")?, "api");
/// # Ok(())
/// # }
/// ```
pub struct ConfigStore {
    tree: ConfigTree,
    env: Box<dyn EnvironmentSource>,
}

impl ConfigStore {
    /// Creates a new store builder.
    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    /// Creates a store over an already built tree, using the default
    /// environment source.
    pub fn from_tree(tree: ConfigTree) -> Self {
        Self {
            tree,
            env: default_env_source(),
        }
    }

    /// Parses a document held in memory.
    pub fn from_bytes(content: &[u8], format: ConfigFormat) -> Result<Self> {
        let tree = adapters::parser_for(format)?.parse(content)?;
        tracing::debug!(
            "Parsed {} configuration ({} top-level entries)",
            format,
            tree.len()
        );
        Ok(Self::from_tree(tree))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use treecfg::domain::ConfigFormat;
    /// use treecfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::from_file("/etc/myapp/config.yaml", ConfigFormat::Yaml).unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>, format: ConfigFormat) -> Result<Self> {
        let path = path.as_ref();
        let content = adapters::read_config_file(path)?;
        let tree = adapters::parser_for(format)?.parse(&content)?;
        tracing::info!(
            "Loaded {} configuration from '{}' ({} top-level entries)",
            format,
            path.display(),
            tree.len()
        );
        Ok(Self::from_tree(tree))
    }

    /// Reads and parses a configuration file, picking the format from its
    /// extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let format = ConfigFormat::from_path(&path)?;
        Self::from_file(path, format)
    }

    /// Loads `config.yaml` or `config.json` from the OS-appropriate
    /// configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    /// * `format` - Selects the file name and the parser
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use treecfg::domain::ConfigFormat;
    /// use treecfg::service::ConfigStore;
    ///
    /// let store =
    ///     ConfigStore::from_default_location("myapp", "com.example", ConfigFormat::Yaml).unwrap();
    /// ```
    pub fn from_default_location(
        app_name: &str,
        qualifier: &str,
        format: ConfigFormat,
    ) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::FileReadError {
                path: Path::new(app_name).join(format.default_file_name()),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "failed to determine project directories",
                ),
            })?;

        Self::from_file(
            proj_dirs.config_dir().join(format.default_file_name()),
            format,
        )
    }

    /// Replaces the environment source consulted for absent keys.
    pub fn with_env_source(mut self, env: impl EnvironmentSource + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Returns the loaded tree.
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// Returns the raw tree value for a key.
    ///
    /// Only the tree is consulted; there is no environment fallback and no
    /// coercion. Mappings and nulls are reported as absent.
    pub fn get_prop(&self, key: impl AsRef<str>) -> Option<&ConfigNode> {
        self.tree.resolve(&ConfigKey::from(key.as_ref()))
    }

    /// Returns `true` if the tree holds a value for the key.
    pub fn has(&self, key: impl AsRef<str>) -> bool {
        self.get_prop(key).is_some()
    }

    /// Returns the value as a string, or `""` if it cannot be resolved.
    pub fn get_string(&self, key: impl AsRef<str>) -> Result<String> {
        self.get_string_or(key, "")
    }

    /// Returns the value as a string, or `default` if it cannot be resolved.
    ///
    /// An empty string stored in the tree is returned as-is.
    pub fn get_string_or(&self, key: impl AsRef<str>, default: &str) -> Result<String> {
        self.get_with(key.as_ref(), default.to_string(), |value, _| {
            Ok(value.as_string())
        })
    }

    /// Returns the value as a string.
    ///
    /// Fails with `MissingRequiredProperty` if the key cannot be resolved or
    /// resolves to an empty string.
    pub fn require_string(&self, key: impl AsRef<str>) -> Result<String> {
        let key = key.as_ref();
        let value = self.require_with(key, |value, _| Ok(value.as_string()))?;
        if value.is_empty() {
            return Err(ConfigError::missing(key));
        }
        Ok(value)
    }

    /// Returns the value as a boolean, or `false` if it cannot be resolved.
    pub fn get_bool(&self, key: impl AsRef<str>) -> Result<bool> {
        self.get_bool_or(key, false)
    }

    /// Returns the value as a boolean, or `default` if it cannot be resolved.
    ///
    /// Tree values must be native booleans. Environment values are `true`
    /// when they equal `"true"` in any case.
    pub fn get_bool_or(&self, key: impl AsRef<str>, default: bool) -> Result<bool> {
        self.get_with(key.as_ref(), default, ConfigValue::as_bool)
    }

    /// Returns the value as a boolean, failing if it cannot be resolved.
    pub fn require_bool(&self, key: impl AsRef<str>) -> Result<bool> {
        self.require_with(key.as_ref(), ConfigValue::as_bool)
    }

    /// Returns the value as an integer, or `0` if it cannot be resolved.
    pub fn get_int(&self, key: impl AsRef<str>) -> Result<i64> {
        self.get_int_or(key, 0)
    }

    /// Returns the value as an integer, or `default` if it cannot be resolved.
    ///
    /// Tree numbers are truncated toward zero.
    pub fn get_int_or(&self, key: impl AsRef<str>, default: i64) -> Result<i64> {
        self.get_with(key.as_ref(), default, ConfigValue::as_i64)
    }

    /// Returns the value as an integer, failing if it cannot be resolved.
    pub fn require_int(&self, key: impl AsRef<str>) -> Result<i64> {
        self.require_with(key.as_ref(), ConfigValue::as_i64)
    }

    /// Returns the value as an `f32`, or `0.0` if it cannot be resolved.
    pub fn get_f32(&self, key: impl AsRef<str>) -> Result<f32> {
        self.get_f32_or(key, 0.0)
    }

    /// Returns the value as an `f32`, or `default` if it cannot be resolved.
    pub fn get_f32_or(&self, key: impl AsRef<str>, default: f32) -> Result<f32> {
        self.get_with(key.as_ref(), default, ConfigValue::as_f32)
    }

    /// Returns the value as an `f32`, failing if it cannot be resolved.
    pub fn require_f32(&self, key: impl AsRef<str>) -> Result<f32> {
        self.require_with(key.as_ref(), ConfigValue::as_f32)
    }

    /// Returns the value as an `f64`, or `0.0` if it cannot be resolved.
    pub fn get_f64(&self, key: impl AsRef<str>) -> Result<f64> {
        self.get_f64_or(key, 0.0)
    }

    /// Returns the value as an `f64`, or `default` if it cannot be resolved.
    pub fn get_f64_or(&self, key: impl AsRef<str>, default: f64) -> Result<f64> {
        self.get_with(key.as_ref(), default, ConfigValue::as_f64)
    }

    /// Returns the value as an `f64`, failing if it cannot be resolved.
    pub fn require_f64(&self, key: impl AsRef<str>) -> Result<f64> {
        self.require_with(key.as_ref(), ConfigValue::as_f64)
    }

    /// Returns a base64-encoded secret, decoded.
    ///
    /// Returns `""` if the key cannot be resolved or resolves to an empty
    /// string. Tree values must be strings. Values that are not valid standard
    /// base64, or that do not decode to UTF-8, fail with
    /// `InvalidSecretEncoding`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treecfg::adapters::MapEnv;
    /// use treecfg::domain::ConfigTree;
    /// use treecfg::service::ConfigStore;
    ///
    /// let store = ConfigStore::from_tree(ConfigTree::new())
    ///     .with_env_source(MapEnv::new().with_var("SECRET_ENV", "c2VjcmV0X3ZhbA=="));
    /// assert_eq!(store.get_secret("SECRET_ENV").unwrap(), "secret_val");
    /// ```
    pub fn get_secret(&self, key: impl AsRef<str>) -> Result<String> {
        let key = key.as_ref();
        match self.lookup(&ConfigKey::from(key)) {
            Some(value) => decode_secret(key, value.as_str_strict(key)?),
            None => Ok(String::new()),
        }
    }

    /// Returns a base64-encoded secret, decoded, failing if it cannot be
    /// resolved or is empty.
    pub fn require_secret(&self, key: impl AsRef<str>) -> Result<String> {
        let key = key.as_ref();
        let secret = self.get_secret(key)?;
        if secret.is_empty() {
            return Err(ConfigError::missing(key));
        }
        Ok(secret)
    }

    /// Looks a key up in the tree, then in the environment.
    fn lookup(&self, key: &ConfigKey) -> Option<ConfigValue> {
        if let Some(node) = self.tree.resolve(key) {
            return Some(ConfigValue::Tree(node.clone()));
        }

        let env_name = key.env_var_name();
        let value = self.env.var_non_empty(&env_name)?;
        tracing::debug!(
            "Resolved '{}' from environment variable '{}' ({})",
            key,
            env_name,
            self.env.name()
        );
        Some(ConfigValue::Env(value))
    }

    fn get_with<T>(
        &self,
        key: &str,
        default: T,
        convert: impl FnOnce(&ConfigValue, &str) -> Result<T>,
    ) -> Result<T> {
        match self.lookup(&ConfigKey::from(key)) {
            Some(value) => convert(&value, key),
            None => {
                tracing::debug!("Property '{}' not found, using default", key);
                Ok(default)
            }
        }
    }

    fn require_with<T>(
        &self,
        key: &str,
        convert: impl FnOnce(&ConfigValue, &str) -> Result<T>,
    ) -> Result<T> {
        let value = self
            .lookup(&ConfigKey::from(key))
            .ok_or_else(|| ConfigError::missing(key))?;
        convert(&value, key)
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("tree", &self.tree)
            .field("env", &self.env.name())
            .finish()
    }
}

fn decode_secret(key: &str, encoded: &str) -> Result<String> {
    if encoded.is_empty() {
        return Ok(String::new());
    }

    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| ConfigError::InvalidSecretEncoding {
            key: key.to_string(),
            source: Box::new(e),
        })?;

    String::from_utf8(bytes).map_err(|e| ConfigError::InvalidSecretEncoding {
        key: key.to_string(),
        source: Box::new(e),
    })
}

fn default_env_source() -> Box<dyn EnvironmentSource> {
    #[cfg(feature = "env")]
    {
        Box::new(adapters::ProcessEnv::new())
    }
    #[cfg(not(feature = "env"))]
    {
        Box::new(adapters::MapEnv::new())
    }
}

/// Builder for constructing a `ConfigStore`.
///
/// A builder without a document produces a store over an empty tree, which
/// resolves every key from the environment.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::MapEnv;
/// use treecfg::service::ConfigStoreBuilder;
///
/// # fn main() -> treecfg::domain::Result<()> {
/// let store = ConfigStoreBuilder::new()
///     .with_env_source(MapEnv::new().with_var("APP_DEBUG", "TRUE"))
///     .build()?;
/// assert!(store.get_bool("app.debug")?);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ConfigStoreBuilder {
    tree: Option<ConfigTree>,
    env: Option<Box<dyn EnvironmentSource>>,
}

impl ConfigStoreBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already built tree.
    pub fn with_tree(mut self, tree: ConfigTree) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Parses a document held in memory.
    pub fn with_bytes(self, content: &[u8], format: ConfigFormat) -> Result<Self> {
        let tree = adapters::parser_for(format)?.parse(content)?;
        Ok(self.with_tree(tree))
    }

    /// Reads and parses a configuration file.
    pub fn with_file(self, path: impl AsRef<Path>, format: ConfigFormat) -> Result<Self> {
        let store = ConfigStore::from_file(path, format)?;
        Ok(self.with_tree(store.tree))
    }

    /// Reads and parses a configuration file, picking the format from its
    /// extension.
    pub fn with_path(self, path: impl AsRef<Path>) -> Result<Self> {
        let format = ConfigFormat::from_path(&path)?;
        self.with_file(path, format)
    }

    /// Sets the environment source consulted for absent keys.
    pub fn with_env_source(mut self, env: impl EnvironmentSource + 'static) -> Self {
        self.env = Some(Box::new(env));
        self
    }

    /// Builds the configuration store.
    pub fn build(self) -> Result<ConfigStore> {
        Ok(ConfigStore {
            tree: self.tree.unwrap_or_default(),
            env: self.env.unwrap_or_else(default_env_source),
        })
    }
}
