//! # SIP Web
//!
//! The parts of an app server that do not depend on which app it is:
//! error-to-response mapping, telemetry, environment config, the health
//! endpoint and the HTTP server bootstrap with static file serving.

pub mod config;
pub mod error;
pub mod health;
pub mod server;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{AppError, AppResult};
pub use server::{json_config, query_config, run, static_files};
pub use telemetry::{TelemetryConfig, init_telemetry};
