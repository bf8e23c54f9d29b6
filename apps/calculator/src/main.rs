//! # Calculator Server
//!
//! Serves the calculator page and keeps the last calculations in memory.

use actix_web::web;

mod config;
mod handlers;
mod state;

use config::CalculatorConfig;
use sip_web::TelemetryConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    sip_web::init_telemetry(
        &TelemetryConfig::from_env("calculator"),
        env!("CARGO_CRATE_NAME"),
    );

    let config = CalculatorConfig::from_env();
    let state = web::Data::new(AppState::new(config.history_capacity));

    sip_web::run(&config.server, move |cfg| {
        cfg.app_data(state.clone());
        handlers::configure_routes(cfg);
    })
    .await
}
