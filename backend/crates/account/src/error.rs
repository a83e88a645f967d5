//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
///
/// Param errors name the offending field and map to 400. Every other
/// variant is a collaborator failure and maps to 500; its cause never
/// reaches the client.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Required request param absent or empty
    #[error("Missing param: {0}")]
    MissingParam(&'static str),

    /// Request param present but semantically invalid
    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),

    /// Email validator failed unexpectedly
    #[error("Email validation failed: {0}")]
    Validation(String),

    /// Secret encoding failed
    #[error("Password encryption failed: {0}")]
    Encryption(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::MissingParam(_) | AccountError::InvalidParam(_) => {
                StatusCode::BAD_REQUEST
            }
            AccountError::Validation(_)
            | AccountError::Encryption(_)
            | AccountError::Database(_)
            | AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::MissingParam(_) | AccountError::InvalidParam(_) => ErrorKind::BadRequest,
            AccountError::Validation(_)
            | AccountError::Encryption(_)
            | AccountError::Database(_)
            | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures are collapsed to a generic message; the cause
    /// stays in the server logs only.
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => AppError::internal("Internal server error"),
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Encryption(msg) => {
                tracing::error!(message = %msg, "Password encryption error");
            }
            AccountError::Validation(msg) => {
                tracing::error!(message = %msg, "Email validator error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Signup request rejected");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
