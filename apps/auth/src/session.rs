//! Session cookie handling and the extractors built on it.

use std::time::Duration;

use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use sip_core::DomainError;
use sip_core::domain::Session;
use sip_web::AppError;

use crate::state::AppState;

/// How the session id travels to and from the browser.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self {
            name: "sid".to_string(),
            secure: false,
        }
    }
}

impl SessionCookie {
    /// Cookie carrying a freshly created session id, living as long as
    /// the session itself (`ttl`).
    pub fn issue(&self, id: &str, ttl: Duration) -> Cookie<'static> {
        let max_age = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Cookie::build(self.name.clone(), id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::seconds(max_age))
            .finish()
    }

    /// Cookie telling the browser to forget the session id.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.name.clone(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

/// A live session together with the id the cookie carried.
///
/// Rejects the request with 401 `Not logged in` when there is none:
/// ```ignore
/// async fn me(current: CurrentSession) -> impl Responder { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub id: String,
    pub session: Session,
}

/// Session extractor that never fails for a missing or expired session.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<CurrentSession>);

impl OptionalSession {
    pub fn is_logged_in(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for OptionalSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
            tracing::error!("AppState not found in app data");
            return Box::pin(async { Err(AppError::internal("Server configuration error")) });
        };
        let id = req
            .cookie(&state.cookie.name)
            .map(|c| c.value().to_string())
            .filter(|v| !v.is_empty());

        Box::pin(async move {
            let Some(id) = id else {
                return Ok(OptionalSession(None));
            };
            let session = state.sessions.load(&id).await?;
            Ok(OptionalSession(session.map(|session| CurrentSession { id, session })))
        })
    }
}

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let optional = OptionalSession::from_request(req, payload);
        Box::pin(async move {
            optional
                .await?
                .0
                .ok_or_else(|| AppError::from(DomainError::Unauthorized))
        })
    }
}
