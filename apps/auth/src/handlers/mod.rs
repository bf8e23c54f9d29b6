//! HTTP handlers.

mod account;
mod pages;

use actix_web::web;

/// Configure the account API and the guarded pages. Routes registered here
/// take precedence over the static file fallback.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/register", web::post().to(account::register))
        .route("/api/login", web::post().to(account::login))
        .route("/api/logout", web::post().to(account::logout))
        .route("/api/me", web::get().to(account::me))
        .route("/", web::get().to(pages::root))
        .route("/login.html", web::get().to(pages::login_page))
        .route("/register.html", web::get().to(pages::register_page))
        .route("/dashboard.html", web::get().to(pages::dashboard));
}
