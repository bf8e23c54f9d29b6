//! Application state - shared across all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use sip_core::ports::{Cache, PasswordService, SessionStore, UserRepository};
use sip_infra::{Argon2PasswordService, CacheSessionStore, InMemoryCache, JsonUserRepository};

use crate::session::SessionCookie;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionStore>,
    /// Backing store of `sessions`, kept for periodic purging.
    pub cache: Arc<dyn Cache>,
    pub cookie: SessionCookie,
    /// Where the page templates live.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(
        data_dir: &Path,
        static_dir: PathBuf,
        cookie: SessionCookie,
        session_ttl: Duration,
    ) -> Self {
        tracing::info!(
            data_dir = %data_dir.display(),
            session_ttl_secs = session_ttl.as_secs(),
            "Users stored as JSON, sessions in memory"
        );

        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());
        Self {
            users: Arc::new(JsonUserRepository::in_dir(data_dir)),
            passwords: Arc::new(Argon2PasswordService::new()),
            sessions: Arc::new(CacheSessionStore::new(cache.clone(), session_ttl)),
            cache,
            cookie,
            static_dir,
        }
    }
}
