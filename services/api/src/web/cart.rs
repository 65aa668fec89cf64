//! services/api/src/web/cart.rs
//!
//! Cart endpoints. Every mutation is applied to the caller's session only.

use crate::error::{ApiError, ErrorResponse};
use crate::web::extract::ApiJson;
use crate::web::protocol::{BookCatalogItemRequest, BookedResponse, CartResponse, RemoveItemResponse};
use crate::web::rest::load_session;
use crate::web::state::{AppState, SessionId};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use nordic_explorer_core::CartItem;
use std::sync::Arc;
use tracing::info;

/// Show the cart with its running total.
#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "The caller's cart", body = CartResponse)
    )
)]
pub async fn view_cart(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
) -> Result<Json<CartResponse>, ApiError> {
    let session = load_session(&state, session_id).await?;
    Ok(Json(CartResponse::from(session.cart())))
}

/// Append an arbitrary item. Duplicates are kept.
#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = CartItem,
    responses(
        (status = 201, description = "Item added", body = CartResponse),
        (status = 400, description = "Missing item name", body = ErrorResponse)
    )
)]
pub async fn add_item(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(item): ApiJson<CartItem>,
) -> Result<(StatusCode, Json<CartResponse>), ApiError> {
    if item.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Item name must not be empty".to_string()));
    }

    let mut session = load_session(&state, session_id).await?;
    info!(session_id = %session_id.0, item = %item.name, price = item.price, "Adding item to cart");
    session.cart.add_item(item);

    let response = CartResponse::from(session.cart());
    state.sessions.save(session).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Remove the first item with exactly this name. Unknown names are a no-op.
#[utoipa::path(
    delete,
    path = "/api/cart/items/{name}",
    params(
        ("name" = String, Path, description = "Exact item name")
    ),
    responses(
        (status = 200, description = "Cart after removal", body = RemoveItemResponse)
    )
)]
pub async fn remove_item(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    Path(name): Path<String>,
) -> Result<Json<RemoveItemResponse>, ApiError> {
    let mut session = load_session(&state, session_id).await?;
    let removed = session.cart.remove_item(&name);

    let response = RemoveItemResponse {
        removed,
        cart: CartResponse::from(session.cart()),
    };
    if removed {
        info!(session_id = %session_id.0, item = %name, "Removed item from cart");
        state.sessions.save(session).await?;
    }
    Ok(Json(response))
}

/// Book a catalog adventure by name.
#[utoipa::path(
    post,
    path = "/api/adventures/book",
    request_body = BookCatalogItemRequest,
    responses(
        (status = 201, description = "Adventure added to the cart", body = BookedResponse),
        (status = 404, description = "No adventure with that name", body = ErrorResponse)
    )
)]
pub async fn book_adventure(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(request): ApiJson<BookCatalogItemRequest>,
) -> Result<(StatusCode, Json<BookedResponse>), ApiError> {
    let item = state
        .catalog
        .find_adventure(&request.name)
        .map(|a| a.to_cart_item())
        .ok_or_else(|| ApiError::NotFound(format!("No adventure named '{}'", request.name)))?;

    let message = format!("✅ {} added to cart!", item.name);
    book(&state, session_id, item, message).await
}

/// Book a catalog accommodation by name, at its nightly rate.
#[utoipa::path(
    post,
    path = "/api/accommodations/book",
    request_body = BookCatalogItemRequest,
    responses(
        (status = 201, description = "Accommodation added to the cart", body = BookedResponse),
        (status = 404, description = "No accommodation with that name", body = ErrorResponse)
    )
)]
pub async fn book_accommodation(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(request): ApiJson<BookCatalogItemRequest>,
) -> Result<(StatusCode, Json<BookedResponse>), ApiError> {
    let item = state
        .catalog
        .find_accommodation(&request.name)
        .map(|a| a.to_cart_item())
        .ok_or_else(|| ApiError::NotFound(format!("No accommodation named '{}'", request.name)))?;

    book(&state, session_id, item, "Added to booking!".to_string()).await
}

async fn book(
    state: &AppState,
    session_id: SessionId,
    item: CartItem,
    message: String,
) -> Result<(StatusCode, Json<BookedResponse>), ApiError> {
    let mut session = load_session(state, session_id).await?;
    info!(session_id = %session_id.0, item = %item.name, "Booked catalog item");
    session.cart.add_item(item.clone());

    let response = BookedResponse {
        message,
        item,
        cart: CartResponse::from(session.cart()),
    };
    state.sessions.save(session).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
