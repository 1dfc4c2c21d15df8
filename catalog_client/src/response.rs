use bazaar::Item;
use serde_json::Value;
use tracing::{debug, warn};

use crate::CatalogError;

/// Properties that commonly hold the item list in a wrapped response.
const WRAPPER_KEYS: [&str; 4] = ["items", "data", "results", "content"];

/// Finds the item list in a catalog response.
///
/// Accepts a bare array, an object wrapping the array under one of the
/// usual keys, or failing that, any object property holding an array.
/// A `null` body means an empty catalog.
pub fn extract_items(body: Value) -> Result<Vec<Item>, CatalogError> {
    let array = match body {
        Value::Null => {
            warn!("No data in response");
            return Ok(Vec::new());
        }
        Value::Array(array) => array,
        Value::Object(mut map) => {
            let key = WRAPPER_KEYS
                .iter()
                .map(|k| k.to_string())
                .find(|k| map.get(k).is_some_and(Value::is_array))
                .or_else(|| {
                    map.iter()
                        .find(|(_, v)| v.is_array())
                        .map(|(k, _)| k.clone())
                })
                .ok_or(CatalogError::UnexpectedShape)?;
            debug!(key = %key, "Found items nested in response");
            match map.remove(&key) {
                Some(Value::Array(array)) => array,
                _ => return Err(CatalogError::UnexpectedShape),
            }
        }
        _ => return Err(CatalogError::UnexpectedShape),
    };
    let items = serde_json::from_value::<Vec<Item>>(Value::Array(array))?;
    debug!("Extracted {} items from response", items.len());
    Ok(items)
}
