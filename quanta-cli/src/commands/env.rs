//! Env command implementation

use anyhow::{Context, Result};
use quanta_core::Quantity;

pub fn execute(key: &str, required: bool, fallback: Quantity) -> Result<()> {
    tracing::info!(key, required, fallback = fallback.as_i64(), "Reading quantity from environment");

    let value = quanta_env::get_as_quantity(key, required, fallback.as_i64())
        .with_context(|| format!("Failed to read {key}"))?;

    println!("{value}");

    Ok(())
}
