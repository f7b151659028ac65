//! Request validation for the item routes.
//!
//! Bodies arrive as loose JSON objects so that a wrong type can be reported
//! per field instead of failing the whole body. Every rule of a field runs
//! and each failing one is reported; errors are collected in order id,
//! title, completed.
//!
//! Rules that look at a value's text (length, boolean form) read an absent
//! or null value as the empty string.

use serde_json::{Map, Value};
use todo_core::{CreateItem, FieldError, ItemId, UpdateItem, MAX_TITLE_CHARS};

pub type JsonObject = Map<String, Value>;

/// Validate a raw `{id}` path segment.
///
/// Accepts integer literals with an optional sign and no leading zeros, and
/// requires them to be at least 1. A segment that is not an integer fails
/// both rules. Positive ids too large for `ItemId` are clamped to
/// `ItemId::MAX`, which never names a stored item.
pub fn validate_id(raw: &str) -> Result<ItemId, Vec<FieldError>> {
    let reject = |msg: &str| FieldError::params("id", msg).with_value(raw);

    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let well_formed = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));

    let mut errors = Vec::new();
    if !well_formed {
        errors.push(reject("ID must be an integer"));
    }
    if !well_formed || negative || digits == "0" {
        errors.push(reject("ID must be greater than 0"));
    }
    if errors.is_empty() {
        Ok(digits.parse().unwrap_or(ItemId::MAX))
    } else {
        Err(errors)
    }
}

pub fn validate_title(body: &JsonObject) -> Result<String, Vec<FieldError>> {
    let value = body.get("title");
    let reject = |msg: &str| {
        let error = FieldError::body("title", msg);
        match value {
            Some(value) => error.with_value(value.clone()),
            None => error,
        }
    };

    let mut errors = Vec::new();
    if value.is_none() {
        errors.push(reject("Title is required"));
    }
    if !matches!(value, Some(Value::String(_))) {
        errors.push(reject("Title must be a string"));
    }
    let length = as_text(value).chars().count();
    if length < 1 {
        errors.push(reject("Title cannot be empty"));
    }
    if length > MAX_TITLE_CHARS {
        errors.push(reject("Title cannot be longer than 100 characters"));
    }

    match value {
        Some(Value::String(title)) if errors.is_empty() => Ok(title.clone()),
        _ => Err(errors),
    }
}

/// Accepts JSON booleans and the loose forms `"true"`, `"false"`, `"1"`,
/// `"0"`, `1` and `0`.
pub fn validate_completed(body: &JsonObject) -> Result<bool, Vec<FieldError>> {
    let value = body.get("completed");
    let reject = |msg: &str| {
        let error = FieldError::body("completed", msg);
        match value {
            Some(value) => error.with_value(value.clone()),
            None => error,
        }
    };

    let mut errors = Vec::new();
    if value.is_none() {
        errors.push(reject("Completed is required"));
    }
    let parsed = match as_text(value).as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    };
    match parsed {
        Some(completed) if errors.is_empty() => Ok(completed),
        Some(_) => Err(errors),
        None => {
            errors.push(reject("Completed must be a boolean"));
            Err(errors)
        }
    }
}

/// Text form of a JSON value as seen by the text-based rules.
fn as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| as_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(other) => other.to_string(),
    }
}

pub fn create_request(body: &JsonObject) -> Result<CreateItem, Vec<FieldError>> {
    validate_title(body).map(|title| CreateItem { title })
}

pub fn update_request(raw_id: &str, body: &JsonObject) -> Result<(ItemId, UpdateItem), Vec<FieldError>> {
    let id = validate_id(raw_id);
    let title = validate_title(body);
    let completed = validate_completed(body);

    match (id, title, completed) {
        (Ok(id), Ok(title), Ok(completed)) => Ok((id, UpdateItem { title, completed })),
        (id, title, completed) => Err([id.err(), title.err(), completed.err()]
            .into_iter()
            .flatten()
            .flatten()
            .collect()),
    }
}
