//! HTTP server bootstrap.

use std::path::Path;

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::health;

/// JSON extractor config: malformed bodies become a plain 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::bad_request("Invalid request body").into()
    })
}

/// Query string extractor config: unparseable query strings become a plain 400.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected query string");
        AppError::bad_request("Invalid query string").into()
    })
}

/// Serve `dir` at `/`, with `index.html` as the directory index.
pub fn static_files(dir: &Path) -> Files {
    Files::new("/", dir).index_file("index.html")
}

/// Run a server with the shared middleware, the health route, the app's
/// own routes from `configure`, and static files as the fallback.
pub async fn run<F>(config: &ServerConfig, configure: F) -> std::io::Result<()>
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    tracing::info!(
        "Listening on http://{}:{} (static files from {})",
        config.host,
        config.port,
        config.static_dir.display()
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(query_config())
            .route("/api/health", web::get().to(health::health_check))
            .configure(configure.clone())
            .service(static_files(&static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{HttpResponse, http::StatusCode, test};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Echo {
        #[allow(dead_code)]
        n: u32,
    }

    async fn echo(_body: web::Json<Echo>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[derive(Deserialize)]
    struct Page {
        #[allow(dead_code)]
        filter: Option<String>,
    }

    async fn page(_query: web::Query<Page>) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_malformed_query_is_problem_json() {
        let app = test::init_service(
            App::new()
                .app_data(query_config())
                .route("/page", web::get().to(page)),
        )
        .await;

        let req = test::TestRequest::get().uri("/page?filter=a").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/page?filter=a&filter=b")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["detail"], "Invalid query string");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/echo", web::post().to(echo)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("content-type", "application/json"))
            .set_payload("{oops")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Invalid request body");
    }

    #[actix_web::test]
    async fn test_health_route() {
        let app = test::init_service(
            App::new().route("/api/health", web::get().to(health::health_check)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }
}
