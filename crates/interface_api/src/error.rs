//! API error handling
//!
//! Domain errors map onto HTTP status codes in one place:
//! not-found → 404, validation and lifecycle preconditions (wrong item
//! status, self-claim) → 400, data conflicts → 409, storage → 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::RegistryError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            RegistryError::Validation(_)
            | RegistryError::InvalidState { .. }
            | RegistryError::SelfClaim => ApiError::BadRequest(err.to_string()),
            RegistryError::Conflict(_) => ApiError::Conflict(err.to_string()),
            RegistryError::Storage(_) => {
                tracing::error!(error = %err, "storage failure");
                ApiError::Internal("storage failure".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PortError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = RegistryError::not_found("Item", "42").into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_lifecycle_preconditions_map_to_400() {
        let err: ApiError = RegistryError::invalid_state("FOUND", "CLAIMED").into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = RegistryError::SelfClaim.into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err: ApiError = RegistryError::Conflict("email taken".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_storage_hides_details() {
        let err: ApiError = RegistryError::Storage(PortError::internal("boom")).into();
        match err {
            ApiError::Internal(msg) => assert!(!msg.contains("boom")),
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
