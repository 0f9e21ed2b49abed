// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use treecfg::adapters::MapEnv;
use treecfg::domain::ConfigFormat;
use treecfg::service::ConfigStore;

/// Path to the YAML fixture.
pub const FIXTURE_YAML: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_config.yaml");

/// Path to the JSON fixture, equivalent to the YAML one.
pub const FIXTURE_JSON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_config.json");

/// Loads the YAML fixture with the given environment.
pub fn fixture_store(env: MapEnv) -> ConfigStore {
    ConfigStore::from_file(FIXTURE_YAML, ConfigFormat::Yaml)
        .unwrap()
        .with_env_source(env)
}

/// Creates a temporary file with the given suffix and content.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
pub fn create_temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Builds a map environment from name/value pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> MapEnv {
    pairs.iter().copied().collect()
}
