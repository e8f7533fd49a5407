/// Error types for post-service
///
/// Errors are converted to the HTTP responses API clients see:
/// validation and not-found conditions carry only a message, store
/// failures additionally carry the underlying error and its
/// diagnostic detail.
use crate::db::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for post-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Caller-supplied data failed validation; no store call was made
    Validation(String),

    /// A referenced post does not exist. A normal negative outcome,
    /// not a system fault.
    NotFound(String),

    /// The persistence layer failed. `message` is the
    /// operation-specific client-facing text; the original error is
    /// kept for the response body.
    Store {
        message: String,
        source: StoreError,
    },
}

impl AppError {
    pub fn store(message: &str, source: StoreError) -> Self {
        AppError::Store {
            message: message.to_string(),
            source,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Store { message, source } => {
                write!(f, "Store error: {}: {}", message, source)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => {
                HttpResponse::build(status).json(serde_json::json!({
                    "message": msg,
                }))
            }
            AppError::Store { message, source } => {
                HttpResponse::build(status).json(serde_json::json!({
                    "message": message,
                    "error": source.message(),
                    "detail": source.detail(),
                }))
            }
        }
    }
}
