//! crates/nordic_explorer_core/src/ports.rs
//!
//! Defines the service contracts (traits) the core depends on. The catalog and
//! the session store are both swappable: the core never knows whether the data
//! is compiled in or the sessions live in memory.

use crate::domain::{
    Accommodation, Adventure, Destination, DestinationStats, ItineraryDay, MapPoint, Metric,
};
use crate::session::Session;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Read-only access to the reference data shown by the dashboard.
pub trait CatalogProvider: Send + Sync {
    /// Site-wide headline numbers for the home page.
    fn headline_metrics(&self) -> &[Metric];
    fn destinations(&self) -> &[Destination];
    fn map_points(&self) -> &[MapPoint];
    fn adventures(&self) -> &[Adventure];
    fn accommodations(&self) -> &[Accommodation];
    /// Headline of the itinerary returned by the trip planner.
    fn itinerary_title(&self) -> &str;
    /// The day-by-day template returned by the trip planner.
    fn itinerary(&self) -> &[ItineraryDay];
    fn destination_stats(&self) -> &[DestinationStats];

    fn find_adventure(&self, name: &str) -> Option<&Adventure> {
        self.adventures().iter().find(|a| a.name == name)
    }

    fn find_accommodation(&self, name: &str) -> Option<&Accommodation> {
        self.accommodations().iter().find(|a| a.name == name)
    }
}

/// Holds one isolated session per visitor.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the live session for `id`, creating an empty one if it is
    /// missing or expired. Idempotent for live sessions.
    async fn initialize_if_absent(&self, id: Uuid, now: DateTime<Utc>) -> PortResult<Session>;

    /// Returns the live session for `id`, if any.
    async fn get(&self, id: Uuid, now: DateTime<Utc>) -> PortResult<Option<Session>>;

    /// Stores the session, replacing any previous state for its id.
    async fn save(&self, session: Session) -> PortResult<()>;

    /// Ends a session. Returns whether one existed.
    async fn end(&self, id: Uuid) -> PortResult<bool>;

    /// Drops every session idle past its lifetime. Returns how many were dropped.
    async fn purge_expired(&self, now: DateTime<Utc>) -> PortResult<usize>;
}
