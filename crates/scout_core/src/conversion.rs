use serde_json::{Map, Value};
use thiserror::Error;

use crate::ExtractionTarget;

/// Turns an extraction payload into a plain mapping.
pub type Converter = fn(Value) -> Result<Map<String, Value>, ConversionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("extracted payload is not an object (found {found})")]
    NotAnObject { found: &'static str },
}

/// Accept any JSON object verbatim.
pub fn object(payload: Value) -> Result<Map<String, Value>, ConversionError> {
    match payload {
        Value::Object(map) => Ok(map),
        other => Err(ConversionError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// Accept any JSON object, with `T`'s declared fields moved to the front.
///
/// Values are not checked against the declared kinds. Fields the service
/// left out stay out, and keys `T` does not declare follow in their
/// original order.
pub fn in_field_order<T: ExtractionTarget>(
    payload: Value,
) -> Result<Map<String, Value>, ConversionError> {
    let mut rest = object(payload)?;
    let mut ordered = Map::with_capacity(rest.len());
    for field in T::FIELDS {
        if let Some(value) = rest.shift_remove(field.name) {
            ordered.insert(field.name.to_string(), value);
        }
    }
    ordered.extend(rest);
    Ok(ordered)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
