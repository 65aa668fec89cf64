//! crates/nordic_explorer_core/src/pages.rs
//!
//! The six page handlers and the render pass that wraps them.
//!
//! A render pass is a pure function of the session, the catalog and the
//! visitor's current inputs. It is re-run in full on every interaction and
//! produces a serializable view; drawing widgets is left to the client.

use crate::analytics::{self, AnalyticsError, AnalyticsReport};
use crate::domain::{
    Accommodation, AccommodationType, ActivityType, Adventure, CartItem, Country, Destination,
    Difficulty, Language, MapPoint, Metric, Page, PaymentMethod,
};
use crate::filter::{
    filter_accommodations, filter_adventures, AccommodationFilter, AdventureFilter, PriceRange,
};
use crate::planner::PlannerForm;
use crate::ports::CatalogProvider;
use crate::router::nav_label;
use crate::session::Session;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::Serialize;
use std::ops::RangeInclusive;
use utoipa::ToSchema;

pub const SITE_NAME: &str = "Nordic Explorer";
pub const GUESTS_RANGE: RangeInclusive<u8> = 1..=10;
const DEFAULT_STAY_NIGHTS: i64 = 3;

/// The nightly price slider of the Accommodations page.
pub const STAY_PRICE_SLIDER: PriceSlider = PriceSlider {
    min: 50,
    max: 500,
    default: PriceRange::DEFAULT_STAY,
};
const DEFAULT_GUESTS: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

//=========================================================================================
// Render Inputs
//=========================================================================================

/// Everything a render pass reads besides the session.
pub struct RenderContext<'a> {
    pub session: &'a Session,
    pub catalog: &'a dyn CatalogProvider,
}

/// Dates and party size entered on the Accommodations page. Shown back to the
/// visitor, never used to narrow results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct StayDetails {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
}

impl StayDetails {
    /// Guests are clamped into the accepted range.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate, guests: u8) -> Self {
        Self {
            check_in,
            check_out,
            guests: guests.clamp(*GUESTS_RANGE.start(), *GUESTS_RANGE.end()),
        }
    }

    /// Three nights for two, starting `today`.
    pub fn starting(today: NaiveDate) -> Self {
        Self::new(today, today + Duration::days(DEFAULT_STAY_NIGHTS), DEFAULT_GUESTS)
    }

    /// Zero when check-out is not after check-in.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// The values of every input control on the filterable pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInputs {
    pub adventures: AdventureFilter,
    pub accommodations: AccommodationFilter,
    pub stay: StayDetails,
}

impl PageInputs {
    /// Unconstrained adventures, the default nightly price window and the
    /// default stay starting `today`.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            adventures: AdventureFilter::default(),
            accommodations: AccommodationFilter {
                price: Some(STAY_PRICE_SLIDER.default),
                ..AccommodationFilter::default()
            },
            stay: StayDetails::starting(today),
        }
    }
}

//=========================================================================================
// Views
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct NavEntry {
    pub page: Page,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Footer {
    pub brand: String,
    pub tagline: String,
    pub contact: String,
    pub languages: Vec<Language>,
}

/// Sidebar and footer around every page.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageFrame {
    pub site_name: String,
    pub current_page: Page,
    pub navigation: Vec<NavEntry>,
    pub language: Language,
    pub languages: Vec<Language>,
    pub cart_items: usize,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomeView {
    pub headline: String,
    pub tagline: String,
    pub metrics: Vec<Metric>,
    pub featured_destinations: Vec<Destination>,
    pub map: Vec<MapPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TripPlannerView {
    pub heading: String,
    pub intro: String,
    pub form: PlannerForm,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AdventuresView {
    pub heading: String,
    pub filter: AdventureFilter,
    pub countries: Vec<Country>,
    pub activities: Vec<ActivityType>,
    pub difficulties: Vec<Difficulty>,
    pub adventures: Vec<Adventure>,
}

/// A two-handled price slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PriceSlider {
    pub min: u32,
    pub max: u32,
    pub default: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AccommodationsView {
    pub heading: String,
    pub intro: String,
    pub filter: AccommodationFilter,
    pub price_slider: PriceSlider,
    pub stay: StayDetails,
    pub nights: i64,
    pub types: Vec<AccommodationType>,
    pub accommodations: Vec<Accommodation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalyticsView {
    pub heading: String,
    pub report: AnalyticsReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BookingView {
    Empty {
        message: String,
        /// Where the "Browse Adventures" action leads.
        browse_target: Page,
    },
    Ready {
        items: Vec<CartItem>,
        total_cost: u64,
        payment_methods: Vec<PaymentMethod>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    TripPlanner(TripPlannerView),
    Adventures(AdventuresView),
    Accommodations(AccommodationsView),
    Analytics(AnalyticsView),
    Booking(BookingView),
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RenderedPage {
    pub frame: PageFrame,
    pub view: PageView,
}

//=========================================================================================
// Render Pass
//=========================================================================================

/// Renders the session's current page.
pub fn render_current<R: Rng + ?Sized>(
    ctx: &RenderContext<'_>,
    inputs: &PageInputs,
    rng: &mut R,
) -> Result<RenderedPage, RenderError> {
    render_page(ctx.session.current_page(), ctx, inputs, rng)
}

/// Renders `page` for the session in `ctx`.
///
/// Only the Analytics page consumes randomness.
pub fn render_page<R: Rng + ?Sized>(
    page: Page,
    ctx: &RenderContext<'_>,
    inputs: &PageInputs,
    rng: &mut R,
) -> Result<RenderedPage, RenderError> {
    let view = match page {
        Page::Home => PageView::Home(home(ctx.catalog)),
        Page::TripPlanner => PageView::TripPlanner(trip_planner()),
        Page::Adventures => PageView::Adventures(adventures(ctx.catalog, &inputs.adventures)),
        Page::Accommodations => PageView::Accommodations(accommodations(
            ctx.catalog,
            &inputs.accommodations,
            inputs.stay,
        )),
        Page::Analytics => PageView::Analytics(AnalyticsView {
            heading: "📊 Platform Analytics".to_string(),
            report: analytics::generate(rng, ctx.catalog.destination_stats())?,
        }),
        Page::Booking => PageView::Booking(booking(ctx.session)),
    };

    Ok(RenderedPage {
        frame: frame(page, ctx.session),
        view,
    })
}

fn frame(page: Page, session: &Session) -> PageFrame {
    PageFrame {
        site_name: SITE_NAME.to_string(),
        current_page: page,
        navigation: Page::ALL
            .iter()
            .map(|p| NavEntry {
                page: *p,
                label: nav_label(*p),
                active: *p == page,
            })
            .collect(),
        language: session.language,
        languages: Language::ALL.to_vec(),
        cart_items: session.cart().len(),
        footer: Footer {
            brand: format!("🏔️ {SITE_NAME}"),
            tagline: "Your gateway to Scandinavian adventures".to_string(),
            contact: "info@nordicexplorer.com".to_string(),
            languages: Language::ALL.to_vec(),
        },
    }
}

fn home(catalog: &dyn CatalogProvider) -> HomeView {
    HomeView {
        headline: format!("🏔️ {SITE_NAME}"),
        tagline: "Discover the Magic of Scandinavian Adventures".to_string(),
        metrics: catalog.headline_metrics().to_vec(),
        featured_destinations: catalog.destinations().to_vec(),
        map: catalog.map_points().to_vec(),
    }
}

fn trip_planner() -> TripPlannerView {
    TripPlannerView {
        heading: "🗺️ Smart Trip Planner".to_string(),
        intro: "Plan your perfect Nordic adventure with AI-powered recommendations".to_string(),
        form: PlannerForm::new(),
    }
}

fn adventures(catalog: &dyn CatalogProvider, filter: &AdventureFilter) -> AdventuresView {
    AdventuresView {
        heading: "🏔️ Nordic Adventures".to_string(),
        filter: filter.clone(),
        countries: Country::ALL.to_vec(),
        activities: ActivityType::ALL.to_vec(),
        difficulties: Difficulty::ALL.to_vec(),
        adventures: filter_adventures(catalog.adventures(), filter)
            .into_iter()
            .cloned()
            .collect(),
    }
}

fn accommodations(
    catalog: &dyn CatalogProvider,
    filter: &AccommodationFilter,
    stay: StayDetails,
) -> AccommodationsView {
    AccommodationsView {
        heading: "🏨 Nordic Accommodations".to_string(),
        intro: "From ice hotels to cozy cabins - find your perfect Nordic stay".to_string(),
        filter: filter.clone(),
        price_slider: STAY_PRICE_SLIDER,
        stay,
        nights: stay.nights(),
        types: AccommodationType::ALL.to_vec(),
        accommodations: filter_accommodations(catalog.accommodations(), filter)
            .into_iter()
            .cloned()
            .collect(),
    }
}

fn booking(session: &Session) -> BookingView {
    let cart = session.cart();
    if cart.is_empty() {
        return BookingView::Empty {
            message: "🛒 Your cart is empty. Browse our adventures and accommodations to start planning!"
                .to_string(),
            browse_target: Page::Adventures,
        };
    }

    BookingView::Ready {
        items: cart.items().to_vec(),
        total_cost: cart.total_cost(),
        payment_methods: PaymentMethod::ALL.to_vec(),
    }
}
