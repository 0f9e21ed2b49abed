// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the resolution logic.
//!
//! This module contains the configuration tree, keys, resolved values and the
//! error types. It is independent of file formats and of the process
//! environment.

pub mod config_key;
pub mod config_node;
pub mod config_value;
pub mod errors;
pub mod format;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_node::{ConfigNode, ConfigTree};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use format::ConfigFormat;
