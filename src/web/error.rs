//! Web-boundary error type.
//!
//! Repository and form failures are mapped to HTTP responses here, in one
//! place, so handlers stay free of status-code plumbing. An absent record
//! and a foreign-owned one produce the same NotFound response on purpose;
//! the distinction must not leak to the client.

use crate::libs::forms::FormErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Record absent or owned by another user.
    #[error("{0}")]
    NotFound(String),

    /// Form validation failed; carries per-field messages.
    #[error("validation failed")]
    Validation(FormErrors),

    /// Authentication failure (bad credentials, missing session).
    #[error("{0}")]
    Auth(String),

    /// Anything unexpected. Logged, returned as an opaque 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, Json(json!({ "detail": message }))).into_response(),
            AppError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
            AppError::Auth(message) => (StatusCode::UNAUTHORIZED, Json(json!({ "detail": message }))).into_response(),
            AppError::Internal(err) => {
                tracing::error!("internal error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "internal server error" }))).into_response()
            }
        }
    }
}
