//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of `content.products`, in display order.
pub fn product_ids(json: &Value) -> Result<Vec<u64>> {
    let products = json["content"]["products"]
        .as_array()
        .context("Expected 'content.products' array in JSON")?;

    products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p["id"]
                .as_u64()
                .with_context(|| format!("Product {} missing numeric id", i))
        })
        .collect()
}

/// Assert the listed products are exactly `expected`, in order.
pub fn assert_product_ids(json: &Value, expected: &[u64]) -> Result<()> {
    let ids = product_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected products {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Assert the status line state, e.g. `displayed` or `failed`.
pub fn assert_status(json: &Value, expected: &str) -> Result<()> {
    let state = json["content"]["status"]["state"]
        .as_str()
        .context("Expected 'content.status.state' in JSON")?;

    if state != expected {
        anyhow::bail!("Expected status {}, got {}", expected, state);
    }
    Ok(())
}
