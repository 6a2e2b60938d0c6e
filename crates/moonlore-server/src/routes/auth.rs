//! Auth Routes - thin proxy over the external auth provider
//!
//! Validation failures answer inline with 400; credential rejections pass the
//! provider's message through with 401; anything else is logged and replaced
//! with a generic message. Nothing is retried.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use moonlore::{AuthProvider, SignUpOutcome};

use crate::error::{bad_request, from_domain, internal, unauthorized, ApiError};
use crate::models::{LoginRequest, SessionResponse, SignupRequest, SignupResponse, UserResponse};
use crate::AppState;

const AUTH_UNAVAILABLE: &str = "Authentication service is unavailable. Please try again later.";

fn provider(state: &AppState) -> Result<&Arc<dyn AuthProvider>, ApiError> {
    state
        .auth
        .as_ref()
        .ok_or_else(|| internal("Authentication service is not configured"))
}

/// Pull the token out of a `Bearer` Authorization header
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Invalid Authorization header format"))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = SignupResponse),
        (status = 400, description = "Validation failure", body = crate::error::ErrorBody),
        (status = 500, description = "Provider failure")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    if payload.email.trim().is_empty() {
        return Err(bad_request("Email is required"));
    }
    if payload.password != payload.confirm_password {
        return Err(bad_request("Passwords do not match"));
    }
    if payload.password.len() < 6 {
        return Err(bad_request("Password must be at least 6 characters"));
    }

    let outcome = provider(&state)?
        .sign_up(&payload.email, &payload.password)
        .await
        .map_err(|e| from_domain(e, AUTH_UNAVAILABLE))?;

    let response = match outcome {
        SignUpOutcome::SessionIssued(session) => SignupResponse {
            status: "ok".to_string(),
            email: payload.email,
            session: Some(session.into()),
        },
        SignUpOutcome::ConfirmationSent { email } => SignupResponse {
            status: "confirmation_sent".to_string(),
            email,
            session: None,
        },
    };

    Ok(Json(response))
}

/// Exchange credentials for a session
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued", body = SessionResponse),
        (status = 401, description = "Credentials rejected", body = crate::error::ErrorBody),
        (status = 500, description = "Provider failure")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = provider(&state)?
        .sign_in(&payload.email, &payload.password)
        .await
        .map_err(|e| from_domain(e, AUTH_UNAVAILABLE))?;

    Ok(Json(session.into()))
}

/// Resolve the account behind the caller's bearer token
#[utoipa::path(
    get,
    path = "/api/auth/user",
    responses(
        (status = 200, description = "Current account", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = provider(&state)?
        .get_user(token)
        .await
        .map_err(|e| from_domain(e, AUTH_UNAVAILABLE))?;

    Ok(Json(user.into()))
}

/// Invalidate the caller's session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out"),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers)?;
    provider(&state)?
        .sign_out(token)
        .await
        .map_err(|e| from_domain(e, AUTH_UNAVAILABLE))?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Signed out"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/user", get(current_user))
        .route("/api/auth/logout", post(logout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router().with_state(AppState::for_tests())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, "Token abc".parse().unwrap());
        assert!(bearer_token(&headers).is_err());

        headers.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_signup_rejects_password_mismatch() {
        let response = app()
            .oneshot(post_json(
                "/api/auth/signup",
                r#"{"email":"a@b.c","password":"secret1","confirmPassword":"secret2"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Passwords do not match");
    }

    #[tokio::test]
    async fn test_signup_rejects_short_password() {
        let response = app()
            .oneshot(post_json(
                "/api/auth/signup",
                r#"{"email":"a@b.c","password":"short","confirmPassword":"short"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Password must be at least 6 characters");
    }

    #[tokio::test]
    async fn test_user_requires_bearer_token() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/auth/user")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
