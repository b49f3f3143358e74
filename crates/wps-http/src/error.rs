//! Maps `WpsError` to HTTP responses (§7's status code table).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use wps_core::{ValidationError, WpsError};

/// `{error, message}` error body. Never carries internal detail for
/// `AccessDenied`/`NotAuthenticated` — those always read the same generic
/// message regardless of the underlying cause.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Either a state-machine failure (`WpsError`) or a schema-validation
/// failure caught before the request ever reaches the manager. Both map
/// onto `{error, message}` bodies; only the validation branch echoes the
/// caller's own mistake back to them.
#[derive(Debug)]
pub enum WpsHttpError {
    Domain(WpsError),
    Validation(ValidationError),
}

impl From<WpsError> for WpsHttpError {
    fn from(error: WpsError) -> Self {
        Self::Domain(error)
    }
}

impl From<ValidationError> for WpsHttpError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl IntoResponse for WpsHttpError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            WpsHttpError::Domain(WpsError::NotAuthenticated) => {
                (StatusCode::FORBIDDEN, "NOT_AUTHENTICATED", "not authenticated".to_string())
            }
            WpsHttpError::Domain(WpsError::AccessDenied) => (StatusCode::FORBIDDEN, "ACCESS_DENIED", "access denied".to_string()),
            WpsHttpError::Domain(WpsError::NoFilesAccessible) => {
                (StatusCode::FORBIDDEN, "ACCESS_DENIED", "access denied".to_string())
            }
            WpsHttpError::Domain(WpsError::InvalidUserKey) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_USER_KEY", "invalid public key".to_string())
            }
            WpsHttpError::Domain(WpsError::Internal(detail)) => {
                tracing::error!(%detail, "internal error serving request");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "internal error".to_string())
            }
            WpsHttpError::Validation(detail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REQUEST", detail.to_string())
            }
        };

        let body = ErrorResponse { error: error_type.to_string(), message };
        (status, Json(body)).into_response()
    }
}
