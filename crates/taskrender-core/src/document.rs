//! Shape validation of a parsed task definition.
//!
//! A task definition arrives as an untyped JSON value. [`ValidDocument::parse`]
//! is the single place its shape is checked; every later stage works on the
//! typed result and never probes the raw value again.

use serde_json::{Map, Value};
use taskrender_common::constants::CONTAINER_DEFINITIONS_KEY;
use taskrender_common::error::{RenderError, Result};

use crate::locator;

/// A task definition whose `containerDefinitions` field is known to be an array.
///
/// The remaining top-level fields are kept opaque. `containerDefinitions`
/// keeps its original key position when the document is turned back into a
/// JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDocument {
    /// Top-level fields; the `containerDefinitions` slot holds a placeholder.
    fields: Map<String, Value>,
    containers: Vec<Value>,
}

impl ValidDocument {
    /// Validates a parsed task definition.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidFormat`] if the value is not an object,
    /// has no `containerDefinitions` field, or that field is not an array.
    pub fn parse(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            tracing::debug!("task definition is not a JSON object");
            return Err(RenderError::InvalidFormat);
        };

        match fields.get_mut(CONTAINER_DEFINITIONS_KEY).map(Value::take) {
            Some(Value::Array(containers)) => {
                tracing::debug!(containers = containers.len(), "task definition shape is valid");
                Ok(Self { fields, containers })
            }
            Some(other) => {
                tracing::debug!(found = %kind(&other), "containerDefinitions is not an array");
                Err(RenderError::InvalidFormat)
            }
            None => {
                tracing::debug!("containerDefinitions is missing");
                Err(RenderError::InvalidFormat)
            }
        }
    }

    /// Returns the container definitions in document order.
    #[must_use]
    pub fn containers(&self) -> &[Value] {
        &self.containers
    }

    /// Returns a top-level field other than `containerDefinitions`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == CONTAINER_DEFINITIONS_KEY {
            return None;
        }
        self.fields.get(key)
    }

    /// Returns the first container definition named `name` for editing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ContainerNotFound`] if no entry matches.
    pub fn container_mut(&mut self, name: &str) -> Result<&mut Map<String, Value>> {
        locator::locate_mut(&mut self.containers, name)
    }

    /// Reassembles the document as a plain JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        let _ = fields.insert(
            CONTAINER_DEFINITIONS_KEY.to_string(),
            Value::Array(self.containers),
        );
        Value::Object(fields)
    }
}

impl TryFrom<Value> for ValidDocument {
    type Error = RenderError;

    fn try_from(value: Value) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ValidDocument> for Value {
    fn from(document: ValidDocument) -> Self {
        document.into_value()
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
