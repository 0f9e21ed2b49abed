// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration store.
//!
//! This module provides [`ConfigStore`], which ties a parsed configuration tree
//! to an environment source and exposes typed accessors.

pub mod config_store;

pub use config_store::{ConfigStore, ConfigStoreBuilder};
