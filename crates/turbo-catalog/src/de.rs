//! Deserialization helpers for GraphQL payloads.

use serde::{Deserialize, Deserializer};

/// GraphQL sends `null` for empty lists; treat it like an absent field.
///
/// Use together with `#[serde(default)]` so a missing field works too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
