//! HTTP handlers and route configuration.

mod tasks;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tasks")
            .service(
                web::resource("")
                    .route(web::get().to(tasks::list_tasks))
                    .route(web::post().to(tasks::create_task)),
            )
            .route("/stats", web::get().to(tasks::task_stats))
            .service(
                web::resource("/{id}")
                    .route(web::patch().to(tasks::update_task))
                    .route(web::delete().to(tasks::delete_task)),
            ),
    );
}
