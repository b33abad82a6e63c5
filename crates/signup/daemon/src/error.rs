//! Error types for signup-daemon

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use signup_registry::RegistryError;
use thiserror::Error;

/// Daemon-level errors
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed catalog could not be loaded into the registry
    #[error("Seed error: {0}")]
    Seed(#[from] RegistryError),

    /// Server startup error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for DaemonError {
    fn from(err: config::ConfigError) -> Self {
        DaemonError::Config(err.to_string())
    }
}

/// API-specific errors.
///
/// The message is sent to clients verbatim as `detail`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Bad request, including roster conflicts
    #[error("{0}")]
    BadRequest(String),

    /// Internal error
    #[error("{0}")]
    Internal(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::ActivityNotFound(_) => ApiError::NotFound("Activity not found".into()),
            RegistryError::AlreadySignedUp { .. } => {
                ApiError::BadRequest("Already signed up".into())
            }
            RegistryError::NotSignedUp { .. } => ApiError::BadRequest("Not signed up".into()),
            RegistryError::InvalidSeed(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            detail: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type alias for daemon operations
pub type DaemonResult<T> = Result<T, DaemonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::NotFound("test".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("test".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_registry_errors_map_to_details() {
        let not_found = ApiError::from(RegistryError::ActivityNotFound("Fake".into()));
        assert!(matches!(not_found, ApiError::NotFound(_)));
        assert!(not_found.to_string().to_lowercase().contains("not found"));

        let duplicate = ApiError::from(RegistryError::AlreadySignedUp {
            activity: "Chess Club".into(),
            email: "a@x.edu".into(),
        });
        assert!(matches!(duplicate, ApiError::BadRequest(_)));
        assert!(duplicate
            .to_string()
            .to_lowercase()
            .contains("already signed up"));

        let missing = ApiError::from(RegistryError::NotSignedUp {
            activity: "Chess Club".into(),
            email: "a@x.edu".into(),
        });
        assert_eq!(missing.to_string(), "Not signed up");
    }
}
