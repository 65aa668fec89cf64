//! services/api/src/web/booking.rs
//!
//! Trip planning and checkout. Both endpoints pause for a configured delay
//! before answering, standing in for work a real backend would do.

use crate::error::{ApiError, ErrorResponse};
use crate::web::extract::ApiJson;
use crate::web::protocol::{BookingConfirmation, BookingRequest};
use crate::web::rest::load_session;
use crate::web::state::{AppState, SessionId};
use axum::{extract::State, response::Json};
use nordic_explorer_core::planner::{BUDGET_RANGE, DURATION_RANGE};
use nordic_explorer_core::{generate_plan, TripPlan, TripPreferences};
use std::sync::Arc;
use tracing::{debug, info};

/// Generate an itinerary for the given preferences.
#[utoipa::path(
    post,
    path = "/api/trip-plan",
    request_body = TripPreferences,
    responses(
        (status = 200, description = "The generated itinerary", body = TripPlan),
        (status = 400, description = "Budget or duration outside the slider range", body = ErrorResponse)
    )
)]
pub async fn generate_trip_plan(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(preferences): ApiJson<TripPreferences>,
) -> Result<Json<TripPlan>, ApiError> {
    if !BUDGET_RANGE.contains(&preferences.budget) {
        return Err(ApiError::BadRequest(format!(
            "Budget must be between €{} and €{}",
            BUDGET_RANGE.start(),
            BUDGET_RANGE.end()
        )));
    }
    if !DURATION_RANGE.contains(&preferences.duration_days) {
        return Err(ApiError::BadRequest(format!(
            "Trip duration must be between {} and {} days",
            DURATION_RANGE.start(),
            DURATION_RANGE.end()
        )));
    }

    debug!(session_id = %session_id.0, ?preferences, "Generating itinerary");
    tokio::time::sleep(state.config.itinerary_delay).await;

    let plan = generate_plan(preferences, state.catalog.as_ref());
    info!(
        session_id = %session_id.0,
        total_cost = plan.total_cost,
        "✨ Your personalized itinerary is ready!"
    );
    Ok(Json(plan))
}

/// Confirm the booking of everything in the cart.
///
/// Payment details are accepted as entered; nothing is charged and the cart
/// is left as it was.
#[utoipa::path(
    post,
    path = "/api/booking/complete",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking confirmed", body = BookingConfirmation),
        (status = 409, description = "The cart is empty", body = ErrorResponse)
    )
)]
pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    session_id: SessionId,
    ApiJson(request): ApiJson<BookingRequest>,
) -> Result<Json<BookingConfirmation>, ApiError> {
    let session = load_session(&state, session_id).await?;
    if session.cart().is_empty() {
        return Err(ApiError::Conflict(
            "Your cart is empty. Start exploring our adventures!".to_string(),
        ));
    }

    tokio::time::sleep(state.config.booking_delay).await;

    let confirmation = BookingConfirmation {
        message: "🎉 Booking confirmed! Check your email for details.".to_string(),
        payment_method: request.payment_method,
        items: session.cart().len(),
        total_cost: session.cart().total_cost(),
    };
    info!(
        session_id = %session_id.0,
        items = confirmation.items,
        total_cost = confirmation.total_cost,
        payment_method = %confirmation.payment_method,
        "Booking confirmed"
    );
    Ok(Json(confirmation))
}
