//! Page routes that depend on whether the visitor is logged in.

use actix_files::NamedFile;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use sip_shared::html;
use sip_web::{AppError, AppResult};

use crate::session::OptionalSession;
use crate::state::AppState;

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

async fn serve_page(state: &AppState, req: &HttpRequest, page: &str) -> AppResult<HttpResponse> {
    let file = NamedFile::open_async(state.static_dir.join(page))
        .await
        .map_err(|e| AppError::internal(format!("Cannot open {page}: {e}")))?;
    Ok(file.into_response(req))
}

/// GET /
pub async fn root(current: OptionalSession) -> HttpResponse {
    if current.is_logged_in() {
        redirect("/dashboard.html")
    } else {
        redirect("/login.html")
    }
}

/// GET /login.html
pub async fn login_page(
    state: web::Data<AppState>,
    current: OptionalSession,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    if current.is_logged_in() {
        return Ok(redirect("/dashboard.html"));
    }
    serve_page(&state, &req, "login.html").await
}

/// GET /register.html
pub async fn register_page(
    state: web::Data<AppState>,
    current: OptionalSession,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    if current.is_logged_in() {
        return Ok(redirect("/dashboard.html"));
    }
    serve_page(&state, &req, "register.html").await
}

/// GET /dashboard.html - filled in with the user's name and email.
pub async fn dashboard(
    state: web::Data<AppState>,
    current: OptionalSession,
) -> AppResult<HttpResponse> {
    let Some(current) = current.0 else {
        return Ok(redirect("/login.html"));
    };

    let template = tokio::fs::read_to_string(state.static_dir.join("dashboard.html"))
        .await
        .map_err(|e| AppError::internal(format!("Cannot read dashboard template: {e}")))?;
    let page = html::render(
        &template,
        &[
            ("name", current.session.user_name.as_str()),
            ("email", current.session.user_email.as_str()),
        ],
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use actix_web::cookie::Cookie;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use serde_json::json;
    use tempfile::TempDir;

    use crate::handlers::configure_routes;
    use sip_infra::auth::DEFAULT_SESSION_TTL;

    use crate::session::SessionCookie;
    use crate::state::AppState;

    macro_rules! app {
        ($dir:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new(
                        $dir.path(),
                        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public")),
                        SessionCookie::default(),
                        DEFAULT_SESSION_TTL,
                    )))
                    .app_data(sip_web::json_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn location(resp: &actix_web::dev::ServiceResponse) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    macro_rules! logged_in {
        ($app:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/register")
                .set_json(json!({"email": "ada@example.com", "password": "pw", "name": "<Ada>"}))
                .to_request();
            let resp = test::call_service(&$app, req).await;
            resp.response()
                .cookies()
                .find(|c| c.name() == "sid")
                .map(|c| c.into_owned())
                .unwrap()
        }};
    }

    #[actix_web::test]
    async fn test_anonymous_visitor_is_sent_to_login() {
        let dir = TempDir::new().unwrap();
        let app = app!(dir);

        for uri in ["/", "/dashboard.html"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/login.html");
        }

        let resp = test::call_service(&app, test::TestRequest::get().uri("/login.html").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_logged_in_visitor_is_sent_to_dashboard() {
        let dir = TempDir::new().unwrap();
        let app = app!(dir);
        let cookie: Cookie<'static> = logged_in!(app);

        for uri in ["/", "/login.html", "/register.html"] {
            let req = test::TestRequest::get().uri(uri).cookie(cookie.clone()).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FOUND);
            assert_eq!(location(&resp), "/dashboard.html");
        }
    }

    #[actix_web::test]
    async fn test_dashboard_shows_escaped_user() {
        let dir = TempDir::new().unwrap();
        let app = app!(dir);
        let cookie: Cookie<'static> = logged_in!(app);

        let req = test::TestRequest::get().uri("/dashboard.html").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains("&lt;Ada&gt;"));
        assert!(page.contains("ada@example.com"));
        assert!(!page.contains("{{name}}"));
    }
}
