//! AuthProvider implementation over the Supabase GoTrue REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use moonlore::domain::entities::{AuthSession, AuthUser, SignUpOutcome};
use moonlore::domain::errors::DomainError;
use moonlore::ports::AuthProvider;

use crate::config::SupabaseConfig;

/// Supabase GoTrue client implementing the AuthProvider port
pub struct SupabaseAuth {
    client: Client,
    config: SupabaseConfig,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

impl SupabaseAuth {
    pub fn new(config: SupabaseConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url, path)
    }

    async fn read_error(&self, status: StatusCode, response: reqwest::Response) -> DomainError {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        tracing::warn!(%status, "auth provider rejected request");
        map_http_error(status, body)
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, DomainError> {
        let response = self
            .client
            .post(self.url("signup"))
            .header("apikey", &self.config.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Sign-up request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.read_error(status, response).await);
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid sign-up response: {e}")))?;

        parse_signup_response(payload)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let response = self
            .client
            .post(self.url("token?grant_type=password"))
            .header("apikey", &self.config.anon_key)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Sign-in request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.read_error(status, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid session response: {e}")))
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, DomainError> {
        let response = self
            .client
            .get(self.url("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("User lookup failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.read_error(status, response).await);
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Invalid user response: {e}")))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .post(self.url("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Sign-out request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.read_error(status, response).await);
        }

        Ok(())
    }
}

/// GoTrue answers a sign-up either with a full session or, when email
/// confirmation is enabled, with just the pending user record.
fn parse_signup_response(payload: Value) -> Result<SignUpOutcome, DomainError> {
    if payload.get("access_token").is_some() {
        let session: AuthSession = serde_json::from_value(payload)
            .map_err(|e| DomainError::ExternalService(format!("Invalid sign-up session: {e}")))?;
        return Ok(SignUpOutcome::SessionIssued(session));
    }

    let email = payload
        .get("email")
        .or_else(|| payload.get("user").and_then(|u| u.get("email")))
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            DomainError::ExternalService("Sign-up response carried no session or user".to_string())
        })?;

    Ok(SignUpOutcome::ConfirmationSent {
        email: email.to_string(),
    })
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            ["error_description", "msg", "message"]
                .iter()
                .find_map(|key| json.get(key).and_then(|v| v.as_str()).map(String::from))
        })
        .unwrap_or_else(|| body.clone());

    match status {
        StatusCode::BAD_REQUEST
        | StatusCode::UNAUTHORIZED
        | StatusCode::FORBIDDEN
        | StatusCode::UNPROCESSABLE_ENTITY => DomainError::Unauthorized(message),
        _ => DomainError::ExternalService(format!("Auth provider error ({status}): {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_signup_with_session() {
        let payload = json!({
            "access_token": "jwt-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "user-1", "email": "manager@lobotomy-corp.com" }
        });

        match parse_signup_response(payload).unwrap() {
            SignUpOutcome::SessionIssued(session) => {
                assert_eq!(session.access_token, "jwt-token");
                assert_eq!(session.user.email, "manager@lobotomy-corp.com");
            }
            other => panic!("expected session, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_signup_confirmation_pending() {
        let payload = json!({
            "id": "user-1",
            "email": "manager@lobotomy-corp.com",
            "confirmation_sent_at": "2024-01-01T00:00:00Z"
        });

        match parse_signup_response(payload).unwrap() {
            SignUpOutcome::ConfirmationSent { email } => {
                assert_eq!(email, "manager@lobotomy-corp.com");
            }
            other => panic!("expected confirmation, got {:?}", other),
        }
    }

    #[test]
    fn test_credential_errors_map_to_unauthorized() {
        let err = map_http_error(
            StatusCode::BAD_REQUEST,
            r#"{"error_description":"Invalid login credentials"}"#.to_string(),
        );
        match err {
            DomainError::Unauthorized(msg) => assert_eq!(msg, "Invalid login credentials"),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_server_errors_map_to_external_service() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(matches!(err, DomainError::ExternalService(_)));
    }
}
