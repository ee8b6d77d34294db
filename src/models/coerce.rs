//! Lenient numeric deserialization for form-layer input.
//!
//! Form fields arrive as numbers, numeric strings, empty strings or `null`.
//! Anything that does not parse as the target type becomes its default
//! (zero) instead of failing the whole document.

use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, IgnoredAny};
use tracing::warn;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Text(String),
    Invalid(IgnoredAny),
}

/// Deserializes `T`, falling back to `T::default()` on any unusable value.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default + FromStr,
{
    match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Ok(value),
        Lenient::Text(text) => match text.trim().parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => {
                if !text.trim().is_empty() {
                    warn!(input = %text, "Unparsable numeric input coerced to default");
                }
                Ok(T::default())
            }
        },
        Lenient::Invalid(_) => {
            warn!("Non-numeric input coerced to default");
            Ok(T::default())
        }
    }
}
