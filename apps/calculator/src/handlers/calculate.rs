//! Server-side evaluation handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use sip_core::domain::calculator::{self, Evaluation};
use sip_core::domain::{Calculator, HistoryEntry, Key, Operator};
use sip_shared::dto::{CalculateRequest, EvaluateRequest};
use sip_web::AppResult;

use crate::state::AppState;

#[derive(Serialize)]
pub struct EvaluateResponse {
    pub display: String,
    pub expression: String,
    pub evaluations: Vec<Evaluation>,
}

/// POST /api/calculate - evaluate `a op b` and record it.
///
/// Division by zero is not a request error: the result is `"Error"`.
pub async fn calculate(
    state: web::Data<AppState>,
    body: web::Json<CalculateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let op: Operator = req.op.parse()?;

    let evaluation = calculator::evaluate(req.a, req.b, op);
    record(&state, &evaluation).await;

    Ok(HttpResponse::Ok().json(evaluation))
}

/// POST /api/evaluate - replay key presses on a fresh keypad.
///
/// Every evaluation the keys trigger is recorded, in order.
pub async fn evaluate_keys(
    state: web::Data<AppState>,
    body: web::Json<EvaluateRequest>,
) -> AppResult<HttpResponse> {
    let keys = body
        .into_inner()
        .keys
        .iter()
        .map(|k| k.parse::<Key>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut calc = Calculator::new();
    let mut evaluations = Vec::new();
    for key in keys {
        if let Some(evaluation) = calc.press(key) {
            record(&state, &evaluation).await;
            evaluations.push(evaluation);
        }
    }

    Ok(HttpResponse::Ok().json(EvaluateResponse {
        display: calc.display(),
        expression: calc.expression(),
        evaluations,
    }))
}

async fn record(state: &AppState, evaluation: &Evaluation) {
    state
        .history
        .record(HistoryEntry::new(
            evaluation.expression.clone(),
            evaluation.result.clone(),
        ))
        .await;
}
