//! Deep copies of layout payloads.

use serde_json::Value;

use crate::error::LayoutError;

/// Deep-copy a JSON object or array.
///
/// Layout payloads are always containers; a missing value, `null` or a bare
/// scalar is rejected with [`LayoutError::InvalidArgument`] instead of being
/// turned into an empty structure.
pub fn deep_clone(source: Option<&Value>) -> Result<Value, LayoutError> {
    match source {
        Some(value @ (Value::Object(_) | Value::Array(_))) => Ok(value.clone()),
        Some(other) => Err(LayoutError::InvalidArgument(format!(
            "deep_clone expects an object or array, got {}",
            kind_of(other)
        ))),
        None => Err(LayoutError::InvalidArgument(
            "deep_clone called without a value".to_owned(),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
