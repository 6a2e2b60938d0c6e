//! Auth Provider Port
//!
//! Abstract interface to the external authentication service. The site only
//! consumes these four calls as opaque operations and renders their results.

use async_trait::async_trait;

use crate::domain::entities::{AuthSession, AuthUser, SignUpOutcome};
use crate::domain::errors::DomainError;

/// External authentication provider interface
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, DomainError>;

    /// Exchange credentials for a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, DomainError>;

    /// Resolve the account behind an access token
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, DomainError>;

    /// Invalidate a session
    async fn sign_out(&self, access_token: &str) -> Result<(), DomainError>;
}
