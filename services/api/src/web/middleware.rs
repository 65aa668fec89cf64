//! services/api/src/web/middleware.rs
//!
//! Session middleware. Every API request is bound to exactly one visitor
//! session, carried in a cookie and created on first contact.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::web::state::{AppState, SessionId};

pub const SESSION_COOKIE: &str = "nordic_session";
pub const SESSION_PATH: &str = "/api/session";

/// Resolves the session cookie, or starts a new session when it is missing,
/// malformed, unknown or expired.
///
/// Inserts the `SessionId` into request extensions for handlers to use.
/// Ending a session passes straight through and never starts a new one.
pub async fn ensure_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if is_session_end(&req) {
        return Ok(next.run(req).await);
    }
    let now = Utc::now();

    // 1. Look up the presented session, if any.
    let live = match session_cookie(req.headers()) {
        Some(id) => state.sessions.get(id, now).await?.map(|_| id),
        None => None,
    };

    // 2. Start a fresh session otherwise. Ids are never taken from the client.
    let (id, started) = match live {
        Some(id) => (id, false),
        None => {
            let purged = state.sessions.purge_expired(now).await?;
            if purged > 0 {
                debug!(purged, "Dropped idle sessions");
            }
            (Uuid::new_v4(), true)
        }
    };
    state.sessions.initialize_if_absent(id, now).await?;

    // 3. Continue to the handler.
    req.extensions_mut().insert(SessionId(id));
    let mut response = next.run(req).await;

    // 4. Hand the new id to the client.
    if started {
        info!(session_id = %id, "Started new session");
        match HeaderValue::from_str(&session_cookie_value(id)) {
            Ok(cookie) => {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            Err(e) => warn!("Failed to encode session cookie: {:?}", e),
        }
    }

    Ok(response)
}

fn is_session_end(req: &Request) -> bool {
    req.method() == Method::DELETE && req.uri().path() == SESSION_PATH
}

/// Parses the session id out of the `Cookie` header.
pub fn session_cookie(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|c| c.trim().strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
}

pub fn session_cookie_value(id: Uuid) -> String {
    format!("{}={}; HttpOnly; SameSite=Lax; Path=/", SESSION_COOKIE, id)
}

/// Expires the session cookie in the browser.
pub fn cleared_session_cookie() -> String {
    format!("{}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0", SESSION_COOKIE)
}
