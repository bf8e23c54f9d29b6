//! To-do configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use sip_web::ServerConfig;

const DEFAULT_PORT: u16 = 3003;

#[derive(Debug, Clone)]
pub struct TodoConfig {
    pub server: ServerConfig,
    /// Directory holding `tasks.json`.
    pub data_dir: PathBuf,
}

impl TodoConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(
                DEFAULT_PORT,
                concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
            ),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))),
        }
    }
}
