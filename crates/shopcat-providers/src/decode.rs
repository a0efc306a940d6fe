use crate::{Error, Result};
use serde_json::Value;
use shopcat_types::{Product, ProductId};
use std::collections::HashSet;
use tracing::warn;

/// Decode a response body into a product list.
///
/// The body must be a JSON array. Records missing a required field, or
/// carrying a negative price, are skipped with a warning; unusable optional
/// fields only lose their own value.
/// Repeated ids keep their first occurrence so ids stay unique.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>> {
    let items = match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items,
        other => {
            return Err(Error::Parse(format!(
                "expected a JSON array of products, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut seen: HashSet<ProductId> = HashSet::with_capacity(items.len());
    let mut products = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let product: Product = match serde_json::from_value(item) {
            Ok(product) => product,
            Err(err) => {
                warn!(index, error = %err, "skipping malformed product record");
                continue;
            }
        };

        if !product.price.is_finite() || product.price < 0.0 {
            warn!(id = %product.id, price = product.price, "skipping product with invalid price");
            continue;
        }

        if !seen.insert(product.id) {
            warn!(id = %product.id, "dropping duplicate product id");
            continue;
        }

        products.push(product);
    }

    Ok(products)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
