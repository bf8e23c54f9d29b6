//! # Tribute Server
//!
//! A static page. The server only adds the health route and request logging.

use sip_web::{ServerConfig, TelemetryConfig};

const DEFAULT_PORT: u16 = 3002;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    sip_web::init_telemetry(&TelemetryConfig::from_env("tribute"), env!("CARGO_CRATE_NAME"));

    let config = ServerConfig::from_env(DEFAULT_PORT, concat!(env!("CARGO_MANIFEST_DIR"), "/public"));
    tracing::debug!(?config, "Loaded configuration");

    sip_web::run(&config, |_cfg| {}).await
}
