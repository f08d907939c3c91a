//! The authentication collaborator surface.
//!
//! Credential validation, session tokens and account storage all live in the
//! hosted service; the client consumes exactly four operations and a fixed
//! table of error codes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

/// The authenticated principal as reported by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Stable identity id assigned by the service.
    pub uid: String,
    pub email: String,
    /// Optional profile display name.
    pub display_name: Option<String>,
}

impl AuthUser {
    /// The name to show for this identity: the display name if set,
    /// otherwise the part of the email before the `@`.
    pub fn name(&self) -> String {
        match &self.display_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(self.email.as_str())
                .to_string(),
        }
    }
}

/// Error codes reported by the auth collaborator.
///
/// The `Display` strings are the fixed human-readable translations; an
/// unrecognized code arrives as [`AuthError::Other`] and passes its native
/// message through unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Account has been disabled")]
    UserDisabled,

    #[error("No account found with this email")]
    UserNotFound,

    #[error("Incorrect password")]
    WrongPassword,

    #[error("Email is already registered")]
    EmailAlreadyInUse,

    #[error("Password is too weak")]
    WeakPassword,

    #[error("{0}")]
    Other(String),
}

/// Narrow interface over the hosted authentication service.
///
/// [`AuthClient::auth_state`] returns a watch channel that always holds the
/// current identity-or-absent value, so a new subscriber observes the state
/// once immediately and then on every change.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Sign in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    /// Create an account and sign it in.
    async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<AuthUser, AuthError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Subscribe to authentication state changes.
    fn auth_state(&self) -> watch::Receiver<Option<AuthUser>>;
}
