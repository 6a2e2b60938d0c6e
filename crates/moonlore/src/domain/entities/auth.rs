//! Entities exchanged with the external authentication provider
//!
//! The provider is an opaque collaborator; these types only carry what the
//! site surfaces back to the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated account as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A live session issued by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

/// Result of a sign-up attempt. Providers with email confirmation enabled
/// register the account without issuing a session.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    SessionIssued(AuthSession),
    ConfirmationSent { email: String },
}
