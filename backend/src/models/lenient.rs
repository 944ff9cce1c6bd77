//! Tolerant field decoders shared by the document models.
//!
//! Upstream documents are produced by separate tools and are frequently
//! partial. These decoders turn wrong-typed or missing values into their
//! "absent" form instead of failing the whole document.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Text form of a scalar. Strings pass through, numbers and booleans are
/// rendered, everything else is absent.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Decode `value` as `T` when it is a JSON object, otherwise `T::default()`.
pub fn object_from_value<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

pub fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(object_from_value(value))
}

/// Like [`object`], but `null` and non-object values are `None`.
pub fn optional_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => Some(object_from_value(value)),
        _ => None,
    })
}

/// A list of objects. A non-array is an empty list; non-object elements
/// decode to `T::default()` so positions are preserved.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(seq_from_value(value))
}

pub fn seq_from_value<T>(value: Value) -> Vec<T>
where
    T: DeserializeOwned + Default,
{
    match value {
        Value::Array(list) => list.into_iter().map(object_from_value).collect(),
        _ => Vec::new(),
    }
}
