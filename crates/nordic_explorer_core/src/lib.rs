pub mod analytics;
pub mod cart;
pub mod domain;
pub mod filter;
pub mod pages;
pub mod planner;
pub mod ports;
pub mod router;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use cart::Cart;
pub use domain::{
    Accommodation, AccommodationType, ActivityType, Adventure, CartItem, Country, Destination,
    DestinationStats, Difficulty, Interest, ItineraryDay, Language, MapPoint, Metric, Page,
    PaymentMethod, Season, TravelStyle, UnknownLabel,
};
pub use filter::{AccommodationFilter, AdventureFilter, FilterError, PriceRange};
pub use pages::{PageInputs, RenderContext, RenderError, RenderedPage, StayDetails};
pub use planner::{generate_plan, BudgetStatus, TripPlan, TripPreferences};
pub use ports::{CatalogProvider, PortError, PortResult, SessionStore};
pub use router::{PageRouter, RouteError};
pub use session::Session;
