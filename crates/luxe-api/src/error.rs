//! HTTP error mapping
//!
//! Every failure leaves the API as `{ "error": <kind>, "message": <text> }`.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use luxe_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "Unauthorized", msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BadRequest", msg)
            }
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DatabaseError",
                    "Database operation failed".to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthorized(failure) => ApiError::Unauthorized(failure.to_string()),
            DomainError::InvalidInput(msg) | DomainError::ValidationError(msg) => {
                ApiError::BadRequest(msg)
            }
            DomainError::NotFound(what) => ApiError::NotFound(format!("{} not found", what)),
            DomainError::AdminPasswordNotInitialized => {
                ApiError::InternalError("Admin password not initialized".to_string())
            }
            DomainError::DatabaseError(msg) => ApiError::DatabaseError(msg),
            DomainError::StorageError(msg) => ApiError::InternalError(format!("Storage failure: {}", msg)),
            DomainError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::error::AuthFailure;

    #[test]
    fn test_domain_error_status_codes() {
        let cases = [
            (DomainError::from(AuthFailure::MissingToken), StatusCode::UNAUTHORIZED),
            (DomainError::InvalidInput("short".into()), StatusCode::BAD_REQUEST),
            (DomainError::NotFound("Order"), StatusCode::NOT_FOUND),
            (DomainError::AdminPasswordNotInitialized, StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn test_unauthorized_message_has_no_prefix() {
        let err = ApiError::from(DomainError::from(AuthFailure::SessionExpired));
        assert!(matches!(err, ApiError::Unauthorized(ref m) if m == "session expired"));
    }
}
