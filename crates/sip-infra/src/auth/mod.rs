//! Authentication implementations.

#[cfg(feature = "auth")]
mod password;
mod session;

#[cfg(feature = "auth")]
pub use password::Argon2PasswordService;
pub use session::{CacheSessionStore, DEFAULT_SESSION_TTL};
