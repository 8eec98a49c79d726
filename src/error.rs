//! Error types for the LabSeq service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == LabSeq Error Enum ==
/// Unified error type for the LabSeq service.
#[derive(Error, Debug)]
pub enum LabSeqError {
    /// The requested index is negative
    #[error("Index must be a non-negative integer. Received: {0}")]
    InvalidIndex(i64),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LabSeqError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            LabSeqError::InvalidIndex(_) => (StatusCode::BAD_REQUEST, "Invalid Index"),
            LabSeqError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error"),
        };

        let body = Json(json!({
            "error": kind,
            "message": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the LabSeq service.
pub type Result<T> = std::result::Result<T, LabSeqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = LabSeqError::InvalidIndex(-7);
        assert_eq!(
            err.to_string(),
            "Index must be a non-negative integer. Received: -7"
        );
    }

    #[test]
    fn test_invalid_index_maps_to_400() {
        let response = LabSeqError::InvalidIndex(-1).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = LabSeqError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
