//! `GET /api/health`, mounted by [`crate::run`] on every app.

use actix_web::{HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness report. It touches no storage.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl Health {
    pub fn now() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(Health::now())
}
