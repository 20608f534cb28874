//! First-match lookup of container definitions by name.
//!
//! Names are not required to be unique; the scan runs in document order and
//! the first entry whose `name` equals the requested name wins.

use serde_json::{Map, Value};
use taskrender_common::constants::CONTAINER_NAME_KEY;
use taskrender_common::error::{RenderError, Result};

/// Returns the first container definition named `name` for editing.
///
/// # Errors
///
/// Returns [`RenderError::ContainerNotFound`] if no entry matches.
pub fn locate_mut<'a>(containers: &'a mut [Value], name: &str) -> Result<&'a mut Map<String, Value>> {
    containers
        .iter_mut()
        .find(|entry| is_named(entry, name))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| not_found(name))
}

// Non-object entries and non-string names never match.
fn is_named(entry: &Value, name: &str) -> bool {
    entry
        .as_object()
        .and_then(|container| container.get(CONTAINER_NAME_KEY))
        .and_then(Value::as_str)
        == Some(name)
}

fn not_found(name: &str) -> RenderError {
    tracing::debug!(container = name, "no container definition with matching name");
    RenderError::ContainerNotFound {
        name: name.to_string(),
    }
}
