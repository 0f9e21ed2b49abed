// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the two external
//! collaborators of the store: document parsers and the environment. They are
//! implemented by adapters in the adapters layer.

pub mod environment;
pub mod parser;

// Re-export commonly used types
pub use environment::EnvironmentSource;
pub use parser::ConfigParser;
