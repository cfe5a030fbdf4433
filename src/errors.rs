//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::FieldErrors;
use crate::types::ErrorResponse;

/// Message returned when the upstream has no users
pub const NO_USER_DATA_MESSAGE: &str = "No user data found";

/// Message returned when an upstream record cannot be reshaped
pub const PROCESSING_ERROR_MESSAGE: &str = "Error processing user data";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Upstream errors
    #[error("{0}")]
    UpstreamUnavailable(String),

    #[error("No user data found")]
    NoUserData,

    #[error("Error processing user data: {0}")]
    MalformedUpstreamRecord(String),

    // Validation
    #[error("Validation failed: {0}")]
    ValidationFailed(FieldErrors),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoUserData => StatusCode::NOT_FOUND,
            AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamUnavailable(_)
            | AppError::MalformedUpstreamRecord(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::ValidationFailed(errors) => {
                tracing::warn!("Upstream user failed validation: {}", errors);
                return (status, Json(errors)).into_response();
            }
            AppError::UpstreamUnavailable(msg) => {
                tracing::warn!("Upstream request failed: {}", msg);
                ErrorResponse::new(msg)
            }
            AppError::NoUserData => ErrorResponse::new(NO_USER_DATA_MESSAGE),
            AppError::MalformedUpstreamRecord(details) => {
                tracing::warn!("Malformed upstream payload: {}", details);
                ErrorResponse::with_details(PROCESSING_ERROR_MESSAGE, details)
            }
            // Hide details for internal errors
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new("An internal error occurred")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::UpstreamUnavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedUpstreamRecord(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::ValidationFailed(errors)
    }
}
