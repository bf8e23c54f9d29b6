//! HTTP handlers and route configuration.

mod calculate;
mod history;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/history")
                    .route(web::get().to(history::list_history))
                    .route(web::post().to(history::record_history)),
            )
            .route("/calculate", web::post().to(calculate::calculate))
            .route("/evaluate", web::post().to(calculate::evaluate_keys)),
    );
}
