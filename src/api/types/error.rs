//! API error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Machine-readable error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    UpstreamError,
    ServerError,
}

/// JSON error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                },
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Upstream (cache or search backend) failure
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, ApiErrorType::UpstreamError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match &error {
            DomainError::NotFound { message } => Self::not_found(message.clone()),
            DomainError::Validation { message } => Self::bad_request(message.clone()),
            DomainError::Cache { .. } | DomainError::SearchBackend { .. } => {
                Self::upstream(error.to_string())
            }
            DomainError::Configuration { .. } | DomainError::Internal { .. } => {
                Self::internal(error.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ApiError::from(DomainError::not_found("film not found"));
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.response.error.error_type, ApiErrorType::NotFoundError);
    }

    #[test]
    fn test_backend_failure_maps_to_502() {
        let error = ApiError::from(DomainError::search_backend("cluster down"));
        assert_eq!(error.status, StatusCode::BAD_GATEWAY);
        assert_eq!(error.response.error.error_type, ApiErrorType::UpstreamError);
    }

    #[test]
    fn test_error_body_shape() {
        let error = ApiError::not_found("film not found");
        let json = serde_json::to_string(&error.response).unwrap();

        assert!(json.contains("\"message\":\"film not found\""));
        assert!(json.contains("\"type\":\"not_found_error\""));
    }
}
