//! HTTP error contract
//!
//! Every failure surfaces as `{ "error": "..." }` with the appropriate
//! status. Provider/network failures are logged and replaced with a generic
//! message; nothing is retried.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use moonlore::DomainError;

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    body(StatusCode::BAD_REQUEST, message)
}

pub fn unauthorized(message: impl Into<String>) -> ApiError {
    body(StatusCode::UNAUTHORIZED, message)
}

pub fn not_found(message: impl Into<String>) -> ApiError {
    body(StatusCode::NOT_FOUND, message)
}

pub fn internal(message: impl Into<String>) -> ApiError {
    body(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Map a domain error to the wire contract. `fallback` is the generic
/// user-facing message used when the real cause should stay in the logs.
pub fn from_domain(err: DomainError, fallback: &str) -> ApiError {
    match err {
        DomainError::NotFound { .. } => not_found(err.to_string()),
        DomainError::Validation(message) => bad_request(message),
        DomainError::Unauthorized(message) => unauthorized(message),
        DomainError::ExternalService(message) => {
            tracing::error!(error = %message, "external service failure");
            internal(fallback)
        }
    }
}
