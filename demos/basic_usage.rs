// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for treecfg.
//!
//! This example demonstrates:
//! - Loading a YAML document
//! - Retrieving typed values with nested and flat dotted keys
//! - Falling back to environment variables and defaults
//! - Decoding base64 secrets
//!
//! To run this example:
//! ```bash
//! # Keys absent from the document are read from the environment
//! export DATABASE_POOL_SIZE="16"
//!
//! cargo run --example basic_usage
//! ```

use treecfg::prelude::*;

const DOCUMENT: &str = r#"
app:
  name: inventory
  debug: true
database:
  host: db.internal
  port: 5432
  timeout: 2.5
  password: aHVudGVyMg==
feature.flags.beta: false
"#;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== treecfg: Basic Usage ===\n");

    let store = ConfigStore::from_bytes(DOCUMENT.as_bytes(), ConfigFormat::Yaml)?;

    println!("--- Nested keys ---");
    println!("app.name       = {}", store.require_string("app.name")?);
    println!("app.debug      = {}", store.get_bool("app.debug")?);
    println!("database.host  = {}", store.require_string("database.host")?);
    println!("database.port  = {}", store.require_int("database.port")?);
    println!("database.timeout = {}", store.get_f64("database.timeout")?);
    println!();

    println!("--- Flat dotted key ---");
    println!(
        "feature.flags.beta = {}",
        store.get_bool_or("feature.flags.beta", true)?
    );
    println!();

    println!("--- Environment fallback and defaults ---");
    println!(
        "database.pool.size = {} (from DATABASE_POOL_SIZE or default)",
        store.get_int_or("database.pool.size", 4)?
    );
    println!(
        "database.user      = {} (default)",
        store.get_string_or("database.user", "postgres")?
    );
    println!();

    println!("--- Secrets ---");
    let password = store.require_secret("database.password")?;
    println!("database.password = {} characters", password.len());
    println!();

    match store.require_string("database.replica") {
        Ok(replica) => println!("database.replica = {}", replica),
        Err(e) => println!("Expected error: {}", e),
    }

    Ok(())
}
