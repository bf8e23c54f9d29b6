//! Registration, login and session handlers.

use actix_web::{HttpResponse, web};

use sip_core::DomainError;
use sip_core::domain::{Session, User};
use sip_core::ports::AuthError;
use sip_shared::RedirectResponse;
use sip_shared::dto::{LoginRequest, MeResponse, RegisterRequest};
use sip_web::{AppError, AppResult};

use crate::session::{CurrentSession, OptionalSession};
use crate::state::AppState;

const DASHBOARD: &str = "/dashboard.html";
const LOGIN_PAGE: &str = "/login.html";

/// Both credentials, or 400 when either is missing or empty.
fn credentials(email: Option<String>, password: Option<String>) -> AppResult<(String, String)> {
    match (
        email.filter(|e| !e.is_empty()),
        password.filter(|p| !p.is_empty()),
    ) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(AppError::bad_request("Email and password required")),
    }
}

/// Replace whatever session the browser had with a new one for `user`.
async fn start_session(
    state: &AppState,
    previous: OptionalSession,
    user: &User,
) -> AppResult<HttpResponse> {
    if let Some(old) = previous.0 {
        state.sessions.destroy(&old.id).await?;
    }
    let id = state.sessions.create(Session::from(user)).await?;

    Ok(HttpResponse::Ok()
        .cookie(state.cookie.issue(&id, state.sessions.ttl()))
        .json(RedirectResponse::to(DASHBOARD)))
}

/// POST /api/register
pub async fn register(
    state: web::Data<AppState>,
    previous: OptionalSession,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let (email, password) = credentials(req.email, req.password)?;

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(DomainError::Duplicate("Email already registered".to_string()).into());
    }

    let password_hash = state.passwords.hash(&password)?;
    // The insert re-checks the email under the file lock.
    let user = state
        .users
        .insert(User::new(&email, password_hash, req.name))
        .await?;
    tracing::info!(user_id = %user.id, "User registered");

    start_session(&state, previous, &user).await
}

/// POST /api/login
pub async fn login(
    state: web::Data<AppState>,
    previous: OptionalSession,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let (email, password) = credentials(req.email, req.password)?;

    let user = state
        .users
        .find_by_email(&email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.passwords.verify(&password, &user.password_hash)? {
        tracing::info!(user_id = %user.id, "Rejected login with wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    tracing::info!(user_id = %user.id, "User logged in");
    start_session(&state, previous, &user).await
}

/// POST /api/logout
pub async fn logout(
    state: web::Data<AppState>,
    current: OptionalSession,
) -> AppResult<HttpResponse> {
    if let Some(current) = current.0 {
        state.sessions.destroy(&current.id).await?;
        tracing::info!(user_id = %current.session.user_id, "User logged out");
    }

    Ok(HttpResponse::Ok()
        .cookie(state.cookie.removal())
        .json(RedirectResponse::to(LOGIN_PAGE)))
}

/// GET /api/me
pub async fn me(current: CurrentSession) -> AppResult<HttpResponse> {
    let session = current.session;
    Ok(HttpResponse::Ok().json(MeResponse {
        id: session.user_id,
        name: session.user_name,
        email: session.user_email,
    }))
}
