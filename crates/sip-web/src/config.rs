//! Server configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a server listens and which directory it serves pages from.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load `HOST`, `PORT` and `STATIC_DIR`, falling back to the app's defaults.
    pub fn from_env(default_port: u16, default_static_dir: &str) -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env_or("PORT", default_port),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(default_static_dir)),
        }
    }
}

/// Parse an environment variable, using `default` when unset or malformed.
pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable environment value");
            default
        }),
        Err(_) => default,
    }
}

/// Read a boolean flag: `1`, `true`, `yes` and `on` enable it.
pub fn env_flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        assert_eq!(env_or("SIP_TEST_SURELY_UNSET_PORT", 3001u16), 3001);
        assert!(!env_flag("SIP_TEST_SURELY_UNSET_FLAG", false));
    }
}
