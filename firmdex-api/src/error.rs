//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use firmdex_core::error::DirectoryError;

use crate::dto::ApiFailure;

/// API error type.
///
/// Serializes as `{ "success": false, "message": ..., "error": ... }` with
/// the matching status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    error: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error,
        }
    }

    /// Not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, None)
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            Some(error.into()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiFailure {
            success: false,
            message: self.message,
            error: self.error,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match &err {
            DirectoryError::CompanyNotFound(_) => ApiError::not_found("Company not found"),
            _ => {
                tracing::error!(error = %err, "Internal error");
                ApiError::internal("An internal error occurred", err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_mapping() {
        let err: ApiError = DirectoryError::CompanyNotFound(7).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Company not found");
        assert!(err.error.is_none());
    }

    #[test]
    fn test_internal_mapping_carries_detail() {
        let err: ApiError = DirectoryError::Internal("fallback construction failed".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.as_deref(), Some("Internal error: fallback construction failed"));
    }
}
