//! Unified error handling with Sentry integration.
//!
//! Every route handler returns `Result<T, AppError>`. Whatever the internal
//! cause — unreachable store, failed operation, malformed id, bad body —
//! the client sees the same fixed `500` plain-text response with no detail;
//! the cause is logged and captured to Sentry. Missing documents are not
//! errors: single-document lookups answer `200` with an error-marker body
//! (see the route handlers).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::DbError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// The document store could not be reached.
    #[error("Connection error: {0}")]
    Connection(#[from] DbError),

    /// A store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] mongodb::error::Error),

    /// A path parameter was not a valid document id.
    #[error("Invalid document id: {0}")]
    InvalidId(#[from] mongodb::bson::oid::Error),

    /// The request body could not be converted to a document.
    #[error("Invalid request body: {0}")]
    Body(#[from] mongodb::bson::ser::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Request error"
        );

        // Uniform and uninformative on purpose: no internal detail leaves
        // the process.
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_every_variant_maps_to_500() {
        let invalid_id = ObjectId::parse_str("not-a-hex-id").unwrap_err();
        let response = AppError::InvalidId(invalid_id).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bad_body =
            crate::serialize::json_to_document(&serde_json::json!("scalar")).unwrap_err();
        let response = AppError::Body(bad_body).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_keeps_cause_for_logs() {
        let invalid_id = ObjectId::parse_str("nope").unwrap_err();
        let err = AppError::InvalidId(invalid_id);
        assert!(err.to_string().starts_with("Invalid document id:"));
    }
}
