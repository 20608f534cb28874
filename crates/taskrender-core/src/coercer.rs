//! Conversion of raw input text into a typed property value.
//!
//! The raw text is parsed as JSON first. Only when that fails is it taken
//! verbatim as a string; there are no other heuristics.

use serde_json::Value;

/// A raw input value after coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    /// The raw text was valid JSON.
    Json(Value),
    /// The raw text was not valid JSON and is used as a plain string.
    Literal(String),
}

impl CoercedValue {
    /// Returns `true` if the raw text fell back to a literal string.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Converts into the JSON value to store.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Literal(text) => Value::String(text),
        }
    }
}

/// Coerces `raw` into a typed value.
///
/// `"true"` becomes a boolean, `"\"nginx\""` the string `nginx`, JSON arrays
/// and objects their structured forms. Anything that fails to parse,
/// including the empty string, is kept as the literal text.
#[must_use]
pub fn coerce(raw: &str) -> CoercedValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => CoercedValue::Json(value),
        Err(err) => {
            tracing::debug!(error = %err, "value is not JSON, using it as a literal string");
            CoercedValue::Literal(raw.to_string())
        }
    }
}
