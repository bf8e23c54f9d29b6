//! Auth configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use sip_web::ServerConfig;
use sip_web::config::{env_flag, env_or};

use crate::session::SessionCookie;

const DEFAULT_PORT: u16 = 3004;
const DEFAULT_SESSION_TTL_HOURS: u64 = 24;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub server: ServerConfig,
    /// Directory holding `users.json`.
    pub data_dir: PathBuf,
    pub cookie: SessionCookie,
    pub session_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let ttl_hours = env_or("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS);

        Self {
            server: ServerConfig::from_env(
                DEFAULT_PORT,
                concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
            ),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))),
            cookie: SessionCookie {
                name: env_or("SESSION_COOKIE_NAME", SessionCookie::default().name),
                secure: env_flag("SESSION_COOKIE_SECURE", false),
            },
            session_ttl: session_ttl(ttl_hours),
        }
    }
}

fn session_ttl(hours: u64) -> Duration {
    Duration::from_secs(hours.saturating_mul(60 * 60))
}
