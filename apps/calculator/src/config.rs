//! Calculator configuration loaded from environment variables.

use sip_core::domain::DEFAULT_HISTORY_CAPACITY;
use sip_web::ServerConfig;
use sip_web::config::env_or;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    pub server: ServerConfig,
    pub history_capacity: usize,
}

impl CalculatorConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(
                DEFAULT_PORT,
                concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
            ),
            history_capacity: env_or("HISTORY_CAPACITY", DEFAULT_HISTORY_CAPACITY),
        }
    }
}
