//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the session and page endpoints and the
//! master definition for the OpenAPI specification.

use crate::error::{ApiError, ErrorResponse};
use crate::web::extract::{ApiJson, ApiQuery};
use crate::web::middleware::{cleared_session_cookie, session_cookie};
use crate::web::protocol::{
    BookCatalogItemRequest, BookedResponse, BookingConfirmation, BookingRequest, CardDetails,
    CartResponse, LanguageRequest, NavigateRequest, RemoveItemResponse, RenderQuery,
    SessionResponse,
};
use crate::web::state::{AppState, SessionId};
use crate::web::{booking, cart};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{Local, Utc};
use nordic_explorer_core::pages::{self, RenderContext};
use nordic_explorer_core::{
    CartItem, PageInputs, PaymentMethod, RenderedPage, Session, TripPlan, TripPreferences,
};
use std::sync::Arc;
use tracing::{debug, info};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        session_summary,
        reset_session,
        end_session,
        select_language,
        navigate,
        render_page,
        cart::view_cart,
        cart::add_item,
        cart::remove_item,
        cart::book_adventure,
        cart::book_accommodation,
        booking::generate_trip_plan,
        booking::complete_booking,
    ),
    components(
        schemas(
            SessionResponse,
            NavigateRequest,
            LanguageRequest,
            RenderedPage,
            CartResponse,
            CartItem,
            RemoveItemResponse,
            BookCatalogItemRequest,
            BookedResponse,
            TripPreferences,
            TripPlan,
            BookingRequest,
            CardDetails,
            PaymentMethod,
            BookingConfirmation,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Nordic Explorer API", description = "Session-scoped travel dashboard: pages, cart, trip planner and booking.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Session Helpers
//=========================================================================================

/// Loads the caller's session, recreating it if it expired mid-request.
pub(crate) async fn load_session(state: &AppState, id: SessionId) -> Result<Session, ApiError> {
    Ok(state.sessions.initialize_if_absent(id.0, Utc::now()).await?)
}

/// Renders the session's current page with default inputs.
fn render_current(state: &AppState, session: &Session) -> Result<RenderedPage, ApiError> {
    let ctx = RenderContext {
        session,
        catalog: state.catalog.as_ref(),
    };
    let inputs = PageInputs::defaults(Local::now().date_naive());
    Ok(pages::render_current(&ctx, &inputs, &mut rand::rng())?)
}

//=========================================================================================
// Session Handlers
//=========================================================================================

/// Summarize the caller's session.
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "The current session", body = SessionResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn session_summary(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = load_session(&state, session_id).await?;
    Ok(Json(SessionResponse::from(&session)))
}

/// Clear the cart and return to the Home page.
#[utoipa::path(
    post,
    path = "/api/session/reset",
    responses(
        (status = 200, description = "Session reset", body = SessionResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut session = load_session(&state, session_id).await?;
    session.reset();
    let response = SessionResponse::from(&session);
    state.sessions.save(session).await?;

    info!(session_id = %session_id.0, "Session reset");
    Ok(Json(response))
}

/// End the session and expire its cookie.
///
/// Never starts a session: a missing or stale cookie is simply cleared.
#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Session ended"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn end_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = session_cookie(&headers) {
        let existed = state.sessions.end(id).await?;
        info!(session_id = %id, existed, "Session ended");
    }

    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, cleared_session_cookie())],
    ))
}

/// Select the display language.
///
/// The choice is stored but does not translate any content.
#[utoipa::path(
    put,
    path = "/api/session/language",
    request_body = LanguageRequest,
    responses(
        (status = 200, description = "Language stored", body = SessionResponse),
        (status = 400, description = "Unknown language", body = ErrorResponse)
    )
)]
pub async fn select_language(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(request): ApiJson<LanguageRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut session = load_session(&state, session_id).await?;
    session.language = request.language;
    let response = SessionResponse::from(&session);
    state.sessions.save(session).await?;
    Ok(Json(response))
}

//=========================================================================================
// Page Handlers
//=========================================================================================

/// Select a page from the sidebar and render it.
#[utoipa::path(
    post,
    path = "/api/navigate",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "The newly selected page", body = RenderedPage),
        (status = 400, description = "Unknown page label", body = ErrorResponse)
    )
)]
pub async fn navigate(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(request): ApiJson<NavigateRequest>,
) -> Result<Json<RenderedPage>, ApiError> {
    let mut session = load_session(&state, session_id).await?;
    let page = session.router.navigate(&request.label)?;
    debug!(session_id = %session_id.0, page = %page, "Navigated");

    let rendered = render_current(&state, &session)?;
    state.sessions.save(session).await?;
    Ok(Json(rendered))
}

/// Render the current page using the given input values.
#[utoipa::path(
    get,
    path = "/api/page",
    params(RenderQuery),
    responses(
        (status = 200, description = "The rendered page", body = RenderedPage),
        (status = 400, description = "Invalid filter input", body = ErrorResponse)
    )
)]
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiQuery(query): ApiQuery<RenderQuery>,
) -> Result<Json<RenderedPage>, ApiError> {
    let inputs = query.into_inputs(Local::now().date_naive())?;
    let session = load_session(&state, session_id).await?;

    let ctx = RenderContext {
        session: &session,
        catalog: state.catalog.as_ref(),
    };
    let rendered = pages::render_current(&ctx, &inputs, &mut rand::rng())?;
    Ok(Json(rendered))
}
