//! Calculation history handlers.

use actix_web::{HttpResponse, web};

use sip_core::domain::{CalcValue, HistoryEntry};
use sip_shared::OkResponse;
use sip_shared::dto::HistoryRequest;
use sip_web::{AppError, AppResult};

use crate::state::AppState;

/// GET /api/history - newest first.
pub async fn list_history(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.history.list().await)
}

/// POST /api/history
///
/// A body missing either field is acknowledged without recording anything.
pub async fn record_history(
    state: web::Data<AppState>,
    body: web::Json<HistoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let (Some(expression), Some(result)) = (req.expression, req.result) else {
        return Ok(HttpResponse::Ok().json(OkResponse::ok()));
    };
    if result.is_null() {
        return Ok(HttpResponse::Ok().json(OkResponse::ok()));
    }

    let result = CalcValue::from_json(result)
        .ok_or_else(|| AppError::bad_request("Result must be a number or a string"))?;
    state
        .history
        .record(HistoryEntry::new(expression, result))
        .await;

    Ok(HttpResponse::Ok().json(OkResponse::ok()))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! app {
        ($capacity:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new($capacity)))
                    .app_data(sip_web::json_config())
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn post(body: Value) -> test::TestRequest {
        test::TestRequest::post().uri("/api/history").set_json(body)
    }

    #[actix_web::test]
    async fn test_post_then_get_newest_first() {
        let app = app!(50);

        let body: Value =
            test::call_and_read_body_json(&app, post(json!({"expression": "1 + 1", "result": 2})).to_request())
                .await;
        assert_eq!(body, json!({"ok": true}));
        test::call_service(&app, post(json!({"expression": "1 ÷ 0", "result": "Error"})).to_request()).await;

        let req = test::TestRequest::get().uri("/api/history").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0]["expression"], "1 ÷ 0");
        assert_eq!(history[0]["result"], "Error");
        assert_eq!(history[1]["result"], json!(2.0));
        assert!(history[0]["time"].is_string());
    }

    #[actix_web::test]
    async fn test_missing_fields_are_ignored() {
        let app = app!(50);

        for body in [json!({}), json!({"expression": "2 + 2"}), json!({"expression": "x", "result": null})] {
            let resp = test::call_service(&app, post(body).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/api/history").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(history.is_empty());
    }

    #[actix_web::test]
    async fn test_non_scalar_result_rejected() {
        let app = app!(50);
        let resp = test::call_service(&app, post(json!({"expression": "x", "result": [1]})).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_history_is_capped() {
        let app = app!(50);
        for n in 0..60 {
            test::call_service(&app, post(json!({"expression": format!("{n} + 0"), "result": n})).to_request()).await;
        }

        let req = test::TestRequest::get().uri("/api/history").to_request();
        let history: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history.len(), 50);
        assert_eq!(history[0]["expression"], "59 + 0");
    }
}
