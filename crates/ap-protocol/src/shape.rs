//! Classification of response bodies and top-level fields.

use serde_json::Value;

use crate::envelope::Envelope;

/// Printed in place of a field the server did not send.
pub const ABSENT: &str = "None";

/// Status codes at or above this are error responses.
pub const ERROR_STATUS_THRESHOLD: u16 = 400;

/// Shape of one top-level envelope field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueShape<'a> {
    Array(usize),
    Object(usize),
    Scalar(&'a Value),
}

impl<'a> ValueShape<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => Self::Array(items.len()),
            Value::Object(map) => Self::Object(map.len()),
            other => Self::Scalar(other),
        }
    }
}

impl std::fmt::Display for ValueShape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array(len) => write!(f, "array with {len} items"),
            Self::Object(len) => write!(f, "object with {len} items"),
            Self::Scalar(value) => f.write_str(&display_value(value)),
        }
    }
}

/// Render a JSON value for a single report line. Strings print unquoted
/// and `null` prints as [`ABSENT`].
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => ABSENT.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render an optional field, falling back to [`ABSENT`].
pub fn display_optional(value: Option<&Value>) -> String {
    value.map_or_else(|| ABSENT.to_string(), display_value)
}

/// Article and kind of a JSON value, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What the probe found in a response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// Body did not decode as JSON; holds the raw text.
    NotJson(String),
    /// Error status with a JSON body.
    ErrorPayload(Value),
    /// Success status with a JSON object body.
    Envelope(Envelope),
    /// Success status with JSON that is not an object.
    NonObject(Value),
}

impl ResponseShape {
    pub fn classify(status: u16, body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => return Self::NotJson(body.to_string()),
        };

        if status >= ERROR_STATUS_THRESHOLD {
            return Self::ErrorPayload(value);
        }

        match Envelope::from_value(value) {
            Ok(envelope) => Self::Envelope(envelope),
            Err(other) => Self::NonObject(other),
        }
    }
}
