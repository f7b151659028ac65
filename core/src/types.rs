//! Request payloads and the validation-error contract of the item API.
//!
//! # Design
//! These are the wire shapes both sides agree on. The server reads request
//! bodies as loose JSON so it can report type errors field by field; the
//! client serializes these structs. `FieldError` keeps the exact key names
//! (`type`, `value`, `msg`, `path`, `location`) that browser clients of the
//! API already consume.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request payload for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub title: String,
}

/// Request payload for replacing an item's title and completion flag.
/// Both fields are required by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub title: String,
    pub completed: bool,
}

/// Where a rejected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Body,
    Params,
}

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    /// The offending value; absent when the field itself was missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: FieldLocation,
}

impl FieldError {
    pub fn new(path: impl Into<String>, location: FieldLocation, msg: impl Into<String>) -> Self {
        Self {
            kind: "field".to_string(),
            value: None,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }

    pub fn body(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(path, FieldLocation::Body, msg)
    }

    pub fn params(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::new(path, FieldLocation::Params, msg)
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Body of every 400 response: `{"errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<FieldError>,
}

impl From<Vec<FieldError>> for ErrorBody {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}
