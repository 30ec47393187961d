//! Parse command implementation

use anyhow::{Context, Result};
use quanta_core::parse_quantity;

pub fn execute(quantities: &[String], json: bool) -> Result<()> {
    tracing::debug!(count = quantities.len(), "Parsing quantities");

    for input in quantities {
        let value = parse_quantity(input)
            .with_context(|| format!("Failed to parse quantity {input:?}"))?;

        tracing::debug!(input = %input, value, "Parsed quantity");

        if json {
            println!("{}", serde_json::json!({ "input": input, "value": value }));
        } else {
            println!("{value}");
        }
    }

    Ok(())
}
