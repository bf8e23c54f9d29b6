//! # Auth Server
//!
//! Register and login pages backed by `users.json`, with server-side
//! sessions identified by an HttpOnly cookie.

use std::time::Duration;

use actix_web::web;

mod config;
mod handlers;
mod session;
mod state;

use config::AuthConfig;
use sip_web::TelemetryConfig;
use state::AppState;

/// How often expired sessions are swept from the cache.
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    sip_web::init_telemetry(&TelemetryConfig::from_env("auth"), env!("CARGO_CRATE_NAME"));

    let config = AuthConfig::from_env();
    let state = AppState::new(
        &config.data_dir,
        config.server.static_dir.clone(),
        config.cookie.clone(),
        config.session_ttl,
    );

    let cache = state.cache.clone();
    actix_web::rt::spawn(async move {
        let mut ticker = actix_web::rt::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            cache.purge_expired().await;
        }
    });

    let state = web::Data::new(state);
    sip_web::run(&config.server, move |cfg| {
        cfg.app_data(state.clone());
        handlers::configure_routes(cfg);
    })
    .await
}
