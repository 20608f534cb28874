//! Setting a single property on a container definition.

use serde_json::{Map, Value};

/// Sets `property` on `container` to `value`, adding it if absent.
///
/// Returns the value previously stored under `property`, if any. All other
/// properties are left untouched.
pub fn merge_property(
    container: &mut Map<String, Value>,
    property: &str,
    value: Value,
) -> Option<Value> {
    container.insert(property.to_string(), value)
}
