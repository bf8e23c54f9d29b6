//! Password hashing and session ports.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::Session;

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Server-side sessions keyed by an opaque id handed to the client.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session and return its new id.
    async fn create(&self, session: Session) -> Result<String, AuthError>;

    /// Look up a live session.
    async fn load(&self, id: &str) -> Result<Option<Session>, AuthError>;

    /// Forget a session. Unknown ids are ignored.
    async fn destroy(&self, id: &str) -> Result<(), AuthError>;

    /// How long a session lives after creation.
    fn ttl(&self) -> Duration;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Session store error: {0}")]
    Session(String),
}
