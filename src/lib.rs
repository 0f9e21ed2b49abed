// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted-key access to YAML and JSON configuration trees.
//!
//! This crate loads a configuration document once, keeps its nested structure
//! as an immutable tree, and answers typed lookups such as
//! `get_int("database.port")`. Keys that are absent from the document fall
//! back to environment variables (`database.port` -> `DATABASE_PORT`).
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and resolution logic (`ConfigKey`,
//!   `ConfigNode`, `ConfigTree`, `ConfigValue`, errors)
//! - **Ports**: Trait definitions for external collaborators (`ConfigParser`,
//!   `EnvironmentSource`)
//! - **Adapters**: YAML and JSON parsers, process and map environments
//! - **Service**: The `ConfigStore` that ties a tree to an environment
//!
//! # Key Resolution
//!
//! A dotted key is first looked up verbatim, so a document may store
//! `another.simple.prop: 4` as a single flat entry. Only when there is no
//! verbatim entry is the key split at its first dot and resolved inside the
//! nested mapping named by the prefix. Mappings are never returned as values.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML document support (default)
//! - `env`: Read the process environment by default (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use treecfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let store = ConfigStore::from_file("config.yaml", ConfigFormat::Yaml)?;
//!
//! let host = store.require_string("database.host")?;
//! let port = store.get_int_or("database.port", 5432)?;
//! let password = store.require_secret("database.password")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{JsonParser, MapEnv, ProcessEnv};
    pub use crate::domain::{
        ConfigError, ConfigFormat, ConfigKey, ConfigNode, ConfigTree, ConfigValue, Result,
    };
    pub use crate::ports::{ConfigParser, EnvironmentSource};
    pub use crate::service::{ConfigStore, ConfigStoreBuilder};

    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
