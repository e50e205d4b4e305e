//! The uniform HTTP error envelope
//!
//! Every handler failure, whatever its cause upstream, flattens to
//! HTTP 500 with `{"detail": "Failed to <operation>: <message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// A failed gateway operation
#[derive(Debug)]
pub struct ApiError {
    operation: &'static str,
    message: String,
}

impl ApiError {
    /// Wrap an underlying failure with the operation it interrupted
    pub fn new(operation: &'static str, source: impl std::fmt::Display) -> Self {
        Self {
            operation,
            message: source.to_string(),
        }
    }

    /// The `detail` string sent to the caller
    pub fn detail(&self) -> String {
        format!("Failed to {}: {}", self.operation, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.detail();
        error!(operation = self.operation, %detail, "Operation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

/// Attach an operation name to a failed capability call
pub trait ResultExt<T> {
    /// Convert the error side into an [`ApiError`] for `operation`
    fn during(self, operation: &'static str) -> Result<T, ApiError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn during(self, operation: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(operation, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_embeds_operation_and_message() {
        let err = ApiError::new("create branch", "ref already exists");
        assert_eq!(err.detail(), "Failed to create branch: ref already exists");
    }

    #[test]
    fn test_during_converts_error_side() {
        let ok: Result<u32, String> = Ok(7);
        assert_eq!(ok.during("list teams").unwrap(), 7);

        let failed: Result<u32, String> = Err("boom".to_string());
        let err = failed.during("list teams").unwrap_err();
        assert_eq!(err.detail(), "Failed to list teams: boom");
    }
}
