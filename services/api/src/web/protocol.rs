//! services/api/src/web/protocol.rs
//!
//! Request and response payloads exchanged with the dashboard client.

use crate::error::ApiError;
use chrono::{DateTime, NaiveDate, Utc};
use nordic_explorer_core::filter::parse_choice;
use nordic_explorer_core::pages::STAY_PRICE_SLIDER;
use nordic_explorer_core::{
    AccommodationFilter, AdventureFilter, Cart, CartItem, Language, Page, PageInputs,
    PaymentMethod, PriceRange, Session, StayDetails,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

//=========================================================================================
// Session and Navigation
//=========================================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct NavigateRequest {
    /// A page label such as "Booking" or "💳 Booking".
    pub label: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LanguageRequest {
    pub language: Language,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub current_page: Page,
    pub language: Language,
    pub language_code: String,
    pub cart_items: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id,
            current_page: session.current_page(),
            language: session.language,
            language_code: session.language.code().to_string(),
            cart_items: session.cart().len(),
            created_at: session.created_at,
        }
    }
}

/// Values of every input control, as query parameters. Select boxes take
/// their display label; "All" or an empty value leaves them unconstrained.
/// The price bounds apply to whichever listing page is rendered. Without
/// them, adventures are unconstrained and stays fall back to the nightly
/// slider's default window.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RenderQuery {
    pub country: Option<String>,
    pub activity: Option<String>,
    pub difficulty: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub location: Option<String>,
    pub accommodation_type: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u8>,
}

impl RenderQuery {
    /// Validates the raw control values. Unset controls take their defaults.
    pub fn into_inputs(self, today: NaiveDate) -> Result<PageInputs, ApiError> {
        let price = PriceRange::from_bounds(self.min_price, self.max_price)?;
        let defaults = StayDetails::starting(today);
        let check_in = self.check_in.unwrap_or(defaults.check_in);

        Ok(PageInputs {
            adventures: AdventureFilter {
                country: parse_choice(self.country.as_deref())?,
                activity: parse_choice(self.activity.as_deref())?,
                difficulty: parse_choice(self.difficulty.as_deref())?,
                price,
            },
            accommodations: AccommodationFilter {
                location: self.location.unwrap_or_default(),
                kind: parse_choice(self.accommodation_type.as_deref())?,
                price: price.or(Some(STAY_PRICE_SLIDER.default)),
            },
            stay: StayDetails::new(
                check_in,
                self.check_out
                    .unwrap_or_else(|| StayDetails::starting(check_in).check_out),
                self.guests.unwrap_or(defaults.guests),
            ),
        })
    }
}

//=========================================================================================
// Cart
//=========================================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total_cost: u64,
    pub is_empty: bool,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total_cost: cart.total_cost(),
            is_empty: cart.is_empty(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RemoveItemResponse {
    /// `false` when no item had that name; the cart is unchanged.
    pub removed: bool,
    pub cart: CartResponse,
}

/// Books a catalog entry by its exact name.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookCatalogItemRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookedResponse {
    pub message: String,
    pub item: CartItem,
    pub cart: CartResponse,
}

//=========================================================================================
// Booking
//=========================================================================================

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

/// Payment form. Nothing is charged and nothing is validated.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingRequest {
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card: Option<CardDetails>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingConfirmation {
    pub message: String,
    pub payment_method: PaymentMethod,
    pub items: usize,
    pub total_cost: u64,
}
