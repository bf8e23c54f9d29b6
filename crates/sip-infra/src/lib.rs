//! # SIP Infrastructure
//!
//! Concrete implementations of the ports defined in `sip-core`:
//! in-memory cache and history, JSON-file repositories, cache-backed
//! sessions and (behind the `auth` feature) Argon2 password hashing.

pub mod auth;
pub mod cache;
pub mod history;
pub mod store;

pub use auth::CacheSessionStore;
pub use cache::InMemoryCache;
pub use history::InMemoryHistory;
pub use store::{JsonFileStore, JsonTaskRepository, JsonUserRepository};

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;
