//! crates/nordic_explorer_core/src/filter.rs
//!
//! Catalog filtering for the Adventures and Accommodations pages. Everything
//! here is pure and re-evaluated on every render.

use crate::domain::{Accommodation, AccommodationType, Adventure, ActivityType, Country, Difficulty};
use serde::Serialize;
use std::str::FromStr;
use utoipa::ToSchema;

/// The select-box value meaning "no constraint".
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("invalid price range: lower bound {low} exceeds upper bound {high}")]
    InvalidRange { low: u32, high: u32 },
}

/// Inclusive price bounds in whole euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PriceRange {
    low: u32,
    high: u32,
}

impl PriceRange {
    /// The nightly window the Accommodations page opens with.
    pub const DEFAULT_STAY: PriceRange = PriceRange { low: 100, high: 300 };

    pub fn new(low: u32, high: u32) -> Result<Self, FilterError> {
        if low > high {
            return Err(FilterError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Builds a range from optional bounds; a missing bound is open-ended.
    /// Returns `None` when both bounds are missing.
    pub fn from_bounds(low: Option<u32>, high: Option<u32>) -> Result<Option<Self>, FilterError> {
        match (low, high) {
            (None, None) => Ok(None),
            (low, high) => Self::new(low.unwrap_or(0), high.unwrap_or(u32::MAX)).map(Some),
        }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn contains(&self, price: u32) -> bool {
        self.low <= price && price <= self.high
    }
}

/// Parses a select-box value. Absent, empty and "All" mean unconstrained.
pub fn parse_choice<T: FromStr>(value: Option<&str>) -> Result<Option<T>, T::Err> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

fn matches<T: PartialEq>(wanted: Option<T>, actual: T) -> bool {
    wanted.map_or(true, |w| w == actual)
}

//=========================================================================================
// Adventures
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdventureFilter {
    pub country: Option<Country>,
    pub activity: Option<ActivityType>,
    pub difficulty: Option<Difficulty>,
    pub price: Option<PriceRange>,
}

impl AdventureFilter {
    pub fn accepts(&self, adventure: &Adventure) -> bool {
        matches(self.country, adventure.country)
            && matches(self.activity, adventure.activity)
            && matches(self.difficulty, adventure.difficulty)
            && self.price.map_or(true, |range| range.contains(adventure.price))
    }
}

pub fn filter_adventures<'a>(catalog: &'a [Adventure], filter: &AdventureFilter) -> Vec<&'a Adventure> {
    catalog.iter().filter(|a| filter.accepts(a)).collect()
}

//=========================================================================================
// Accommodations
//=========================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccommodationFilter {
    /// Case-insensitive substring of the location; empty matches everything.
    pub location: String,
    pub kind: Option<AccommodationType>,
    pub price: Option<PriceRange>,
}

impl AccommodationFilter {
    pub fn accepts(&self, accommodation: &Accommodation) -> bool {
        let needle = self.location.trim().to_lowercase();
        (needle.is_empty() || accommodation.location.to_lowercase().contains(&needle))
            && matches(self.kind, accommodation.kind)
            && self.price.map_or(true, |range| range.contains(accommodation.price_per_night))
    }
}

pub fn filter_accommodations<'a>(
    catalog: &'a [Accommodation],
    filter: &AccommodationFilter,
) -> Vec<&'a Accommodation> {
    catalog.iter().filter(|a| filter.accepts(a)).collect()
}
