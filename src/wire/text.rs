//! Tolerant field decoding.
//!
//! Display text arrives as `"Engineer"`, `{"text": "Engineer"}` or `null`.
//! Every other field may also show up in an unexpected shape. Neither case
//! is fatal: the field is logged and treated as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// A field was present but had the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct FieldError {
    pub expected: &'static str,
    pub found: &'static str,
}

pub(crate) fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const TEXT_SHAPE: &str = "string or {text: string}";

/// Normalise a flexible text value to a plain string.
///
/// `null` and `{"text": null}` become `""`. Anything that is neither a
/// string nor an object carrying a `text` key is a [`FieldError`].
pub fn flexible_text(value: &Value) -> Result<String, FieldError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Object(map) => match map.get("text") {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) => Ok(String::new()),
            Some(other) => Err(FieldError {
                expected: TEXT_SHAPE,
                found: shape(other),
            }),
            None => Err(FieldError {
                expected: TEXT_SHAPE,
                found: "object without text",
            }),
        },
        other => Err(FieldError {
            expected: TEXT_SHAPE,
            found: shape(other),
        }),
    }
}

/// `deserialize_with` adapter for display text.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flexible_text(&value).unwrap_or_else(|e| {
        debug!(error = %e, "absorbing malformed text field");
        String::new()
    }))
}

/// `deserialize_with` adapter for any other field: wrong shape → default.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    let found = shape(&value);
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        debug!(error = %e, found, "absorbing malformed field");
        T::default()
    }))
}
