//! HTTP error handling and the uniform failure funnel.
//!
//! Every asynchronous handler returns `Result<_, AppError>`. Any failure
//! raised during execution — query parsing, validation, store access —
//! converts into [`AppError`] exactly once via `?` and lands in
//! [`AppError::into_response`], the single reporting path: it logs the
//! failure, preserving its identity, and emits the response. Failures
//! are never swallowed and never reported twice.
//!
//! Absence is not a failure. Handlers map a `None`/zero-count result to
//! 404 locally through [`not_found`] without entering the error funnel.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::db::StoreError;
use crate::schema::ValidationError;
use crate::services::ServiceError;

/// JSON error payload, `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Non-numeric pagination parameter
    InvalidQuery(String),
    /// Product fields rejected at the store boundary
    Validation(ValidationError),
    /// Backing store failure
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::InvalidQuery(msg) => msg,
            AppError::Validation(err) => err.to_string(),
            AppError::Store(err) => err.to_string(),
        };

        tracing::error!(error = %message, "request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => AppError::Validation(e),
            ServiceError::Store(e) => AppError::Store(e),
        }
    }
}

/// 404 response with the `{"error": "<Resource> not found"}` payload.
pub fn not_found(resource: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: format!("{resource} not found"),
        }),
    )
        .into_response()
}
