// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable adapters.
//!
//! This module provides the two `EnvironmentSource` implementations: one that
//! reads the live process environment and one backed by a fixed map.

use crate::ports::EnvironmentSource;
use std::collections::HashMap;
use std::env;

/// Environment source that reads the process environment.
///
/// Every lookup goes to the process environment, so changes made between
/// accessor calls are observed. Variables that are not valid UTF-8 are treated
/// as unset.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::ProcessEnv;
/// use treecfg::ports::EnvironmentSource;
///
/// let env = ProcessEnv::new();
/// assert_eq!(env.name(), "process-env");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a new process environment source.
    pub fn new() -> Self {
        ProcessEnv
    }
}

impl EnvironmentSource for ProcessEnv {
    fn name(&self) -> &str {
        "process-env"
    }

    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::debug!("Ignoring non-unicode environment variable '{}'", name);
                None
            }
        }
    }
}

/// Environment source backed by a fixed map of variables.
///
/// Useful in tests and when embedding the store in a program that manages its
/// own environment snapshot.
///
/// # Examples
///
/// ```rust
/// use treecfg::adapters::MapEnv;
/// use treecfg::ports::EnvironmentSource;
///
/// let env = MapEnv::new().with_var("APP_PORT", "8080");
/// assert_eq!(env.var("APP_PORT"), Some("8080".to_string()));
/// assert_eq!(env.var("APP_HOST"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Creates an empty map environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map environment with pre-populated values.
    pub fn with_values(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Returns the environment with one more variable set.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvironmentSource for MapEnv {
    fn name(&self) -> &str {
        "map-env"
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
