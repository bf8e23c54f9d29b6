//! # To-Do Server
//!
//! Serves the to-do page and a small REST API over `tasks.json`.

use actix_web::web;

mod config;
mod handlers;
mod state;

use config::TodoConfig;
use sip_web::TelemetryConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    sip_web::init_telemetry(&TelemetryConfig::from_env("todo"), env!("CARGO_CRATE_NAME"));

    let config = TodoConfig::from_env();
    let state = web::Data::new(AppState::new(&config.data_dir));

    sip_web::run(&config.server, move |cfg| {
        cfg.app_data(state.clone());
        handlers::configure_routes(cfg);
    })
    .await
}
