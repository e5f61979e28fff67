//! Error type system for Shelf
//!
//! This module provides:
//! - A single error enum shared by the store, the authenticator and the handlers
//! - HTTP status code mapping
//! - Structured error bodies carrying a trace ID

use crate::api::middleware::TraceId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Main error type for the Shelf service
#[derive(Debug, thiserror::Error)]
pub enum ShelfError {
    // System-level errors
    #[error("System initialization failed: {0}")]
    InitializationError(String),

    // Storage errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Task error: {0}")]
    TaskError(String),

    // API-related errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    NotFound(String),
}

impl ShelfError {
    /// Not-found error for an item lookup
    pub fn item_not_found(item_id: i64) -> Self {
        ShelfError::NotFound(format!("Item {} not found", item_id))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShelfError::InvalidRequest(_) => StatusCode::BAD_REQUEST,

            ShelfError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,

            ShelfError::PermissionDenied(_) => StatusCode::FORBIDDEN,

            ShelfError::NotFound(_) => StatusCode::NOT_FOUND,

            ShelfError::InitializationError(_)
            | ShelfError::DatabaseError(_)
            | ShelfError::PoolError(_)
            | ShelfError::TaskError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ShelfError::InitializationError(_) => "InitializationError",
            ShelfError::DatabaseError(_) => "DatabaseError",
            ShelfError::PoolError(_) => "PoolError",
            ShelfError::TaskError(_) => "TaskError",
            ShelfError::InvalidRequest(_) => "InvalidRequest",
            ShelfError::AuthenticationError(_) => "AuthenticationError",
            ShelfError::PermissionDenied(_) => "PermissionDenied",
            ShelfError::NotFound(_) => "NotFound",
        }
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique trace ID for this error
    pub trace_id: String,
}

impl ErrorResponse {
    pub fn new(error: String, message: String) -> Self {
        Self {
            error,
            message,
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn with_trace_id(error: String, message: String, trace_id: String) -> Self {
        Self {
            error,
            message,
            trace_id,
        }
    }

    /// Create an error response from a ShelfError
    ///
    /// Inside a request the body carries that request's trace ID; elsewhere
    /// a fresh one is minted.
    pub fn from_error(error: &ShelfError) -> Self {
        match TraceId::current() {
            Some(trace_id) => Self::from_error_with_trace_id(error, trace_id.0),
            None => Self::new(error.error_type().to_string(), error.to_string()),
        }
    }

    pub fn from_error_with_trace_id(error: &ShelfError, trace_id: String) -> Self {
        Self::with_trace_id(error.error_type().to_string(), error.to_string(), trace_id)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (trace_id: {})",
            self.error, self.message, self.trace_id
        )
    }
}

impl IntoResponse for ShelfError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = ErrorResponse::from_error(&self);

        if status_code.is_server_error() {
            tracing::error!(
                error_type = self.error_type(),
                trace_id = %error_response.trace_id,
                status_code = %status_code,
                "Request failed: {}",
                self
            );
        } else {
            tracing::warn!(
                error_type = self.error_type(),
                trace_id = %error_response.trace_id,
                status_code = %status_code,
                "Request rejected: {}",
                self
            );
        }

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can fail with ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Context extension trait for adding context to foreign errors
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ShelfError::InitializationError(format!("{}: {}", context.into(), e)))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ShelfError::InitializationError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ShelfError::InvalidRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShelfError::AuthenticationError("test".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ShelfError::PermissionDenied("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ShelfError::item_not_found(7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShelfError::DatabaseError(rusqlite::Error::InvalidQuery).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ShelfError::TaskError("join".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_item_not_found_message() {
        let error = ShelfError::item_not_found(42);
        assert_eq!(error.error_type(), "NotFound");
        assert_eq!(error.to_string(), "Item 42 not found");
    }

    #[test]
    fn test_error_response_creation() {
        let error = ShelfError::item_not_found(3);
        let response = ErrorResponse::from_error(&error);

        assert_eq!(response.error, "NotFound");
        assert!(response.message.contains("Item 3"));
        assert!(!response.trace_id.is_empty());
    }

    #[test]
    fn test_error_response_with_trace_id() {
        let error = ShelfError::PermissionDenied("Inactive user".into());
        let response = ErrorResponse::from_error_with_trace_id(&error, "trace-123".into());

        assert_eq!(response.error, "PermissionDenied");
        assert_eq!(response.trace_id, "trace-123");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("NotFound".into(), "gone".into());
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["error"], "NotFound");
        assert_eq!(body["message"], "gone");
        assert!(body["trace_id"].is_string());
    }

    #[test]
    fn test_error_context() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"));

        let err = result.context("Failed to create data directory").unwrap_err();
        assert!(err.to_string().contains("Failed to create data directory"));
        assert!(err.to_string().contains("file not found"));
    }
}
