//! Deserializers that drop malformed nodes instead of failing the whole response.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Decodes a list node by node; entries that do not fit `T` are skipped.
pub fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(node) => Some(node),
            Err(e) => {
                tracing::debug!("Dropping undecodable {} node: {}", short_name::<T>(), e);
                None
            }
        })
        .collect())
}

/// Decodes an optional node; a shape mismatch becomes `None`.
pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value) {
        Ok(node) => Some(node),
        Err(e) => {
            tracing::debug!("Ignoring undecodable {} node: {}", short_name::<T>(), e);
            None
        }
    }))
}

fn short_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
