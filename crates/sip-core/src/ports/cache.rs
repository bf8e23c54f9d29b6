use async_trait::async_trait;
use std::time::Duration;

/// Key-value store with per-entry expiry. Backs server-side sessions.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a live value. Expired entries read as absent.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one. `None` never expires.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Remove a key. Returns whether a live entry was removed.
    async fn delete(&self, key: &str) -> Result<bool, CacheError>;

    /// Drop every expired entry, returning how many were removed.
    async fn purge_expired(&self) -> usize;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Operation failed: {0}")]
    Operation(String),
}
