//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the per-request session handle.

use crate::config::Config;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use nordic_explorer_core::ports::{CatalogProvider, SessionStore};
use std::sync::Arc;
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionStore>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub config: Arc<Config>,
}

//=========================================================================================
// SessionId (Specific to One Request)
//=========================================================================================

/// The visitor's session id, resolved by the session middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .copied()
            .ok_or((StatusCode::INTERNAL_SERVER_ERROR, "session middleware not installed"))
    }
}
