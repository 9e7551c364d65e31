//! Response envelope returned by the asset search endpoint.
//!
//! The API makes no schema guarantee, so the envelope keeps the raw JSON
//! object and exposes typed views over the parts the probe reports on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pagination descriptor found under the envelope's `metadata` key.
///
/// Every field holds whatever JSON the server sent. A missing field and an
/// explicit `null` both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub total_pages: Option<Value>,
    #[serde(default)]
    pub total_resources: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
}

impl PageMetadata {
    /// Read pagination fields out of a `metadata` value.
    ///
    /// Returns `None` unless the value is a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(serde_json::from_value(value.clone()).unwrap_or_default()),
            _ => None,
        }
    }
}

/// Top-level JSON object of a successful response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    fields: Map<String, Value>,
}

impl Envelope {
    /// Wrap a parsed response body. Non-object values are handed back.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(other),
        }
    }

    /// Top-level keys in document order.
    pub fn keys(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// The raw `metadata` value, if the key is present.
    pub fn raw_metadata(&self) -> Option<&Value> {
        self.fields.get("metadata")
    }

    /// Pagination fields, when `metadata` is present and an object.
    pub fn metadata(&self) -> Option<PageMetadata> {
        self.raw_metadata().and_then(PageMetadata::from_value)
    }

    /// Asset records under `data`, when it is an array.
    pub fn data(&self) -> Option<&[Value]> {
        self.fields
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    /// First asset record, if `data` is a non-empty array.
    pub fn first_asset(&self) -> Option<&Value> {
        self.data().and_then(<[Value]>::first)
    }
}
