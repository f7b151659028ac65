//! Error types for the item API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers act on
//! them: the first means the id is gone, the second carries the server's
//! per-field messages ready to show to a user. Every other unexpected status
//! lands in `Http` with the raw status code and body.

use crate::types::FieldError;

/// Errors returned by `ItemClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the requested item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the request with 400 and a list of field errors.
    #[error("request rejected: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
