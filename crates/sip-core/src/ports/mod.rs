//! Ports - trait definitions for storage and auth dependencies.
//! Infrastructure crates implement these; handlers only see the traits.

mod auth;
mod cache;
mod history;
mod repository;

pub use auth::{AuthError, PasswordService, SessionStore};
pub use cache::{Cache, CacheError};
pub use history::HistoryStore;
pub use repository::{TaskRepository, UserRepository};
