//! Error type for the HTTP handlers.
//!
//! Bridges validation failures, missing items and store failures into the
//! responses clients expect: 400 with an `{"errors": [...]}` envelope, 404
//! with a plain-text `"<Label> not found"` body, and an opaque 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use todo_core::{ErrorBody, FieldError, ItemKind};

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("request failed validation ({} field errors)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{} not found", .0.label())]
    NotFound(ItemKind),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        AppError::Validation(errors)
    }
}

impl From<FieldError> for AppError {
    fn from(error: FieldError) -> Self {
        AppError::Validation(vec![error])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::from(errors))).into_response()
            }
            AppError::NotFound(kind) => {
                (StatusCode::NOT_FOUND, format!("{} not found", kind.label())).into_response()
            }
            AppError::Store(StoreError::EmptyTitle(_)) => {
                let error = FieldError::body("title", "Title cannot be empty").with_value("");
                AppError::Validation(vec![error]).into_response()
            }
            AppError::Store(StoreError::Backend(message)) => {
                tracing::error!(error = %message, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
        }
    }
}
