//! Sessions stored in the cache port.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use sip_core::domain::Session;
use sip_core::ports::{AuthError, Cache, SessionStore};

/// Session lifetime when none is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const KEY_PREFIX: &str = "session:";

/// Sessions serialized as JSON into a [`Cache`] under `session:<id>`,
/// expiring after a fixed TTL from creation.
pub struct CacheSessionStore {
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CacheSessionStore {
    pub fn new(cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    fn key(id: &str) -> String {
        format!("{KEY_PREFIX}{id}")
    }
}

#[async_trait]
impl SessionStore for CacheSessionStore {
    async fn create(&self, session: Session) -> Result<String, AuthError> {
        let id = Uuid::new_v4().simple().to_string();
        let value = serde_json::to_string(&session).map_err(|e| AuthError::Session(e.to_string()))?;

        self.cache
            .set(&Self::key(&id), &value, Some(self.ttl))
            .await
            .map_err(|e| AuthError::Session(e.to_string()))?;

        tracing::debug!(user_id = %session.user_id, "Session created");
        Ok(id)
    }

    async fn load(&self, id: &str) -> Result<Option<Session>, AuthError> {
        let Some(value) = self.cache.get(&Self::key(id)).await else {
            return Ok(None);
        };

        match serde_json::from_str(&value) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session");
                self.destroy(id).await?;
                Ok(None)
            }
        }
    }

    async fn destroy(&self, id: &str) -> Result<(), AuthError> {
        self.cache
            .delete(&Self::key(id))
            .await
            .map(|_| ())
            .map_err(|e| AuthError::Session(e.to_string()))
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}
