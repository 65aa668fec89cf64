//! crates/nordic_explorer_core/src/planner.rs
//!
//! The trip planner. Preferences are collected and echoed back, but the
//! itinerary is always the catalog's fixed template.

use crate::domain::{Interest, ItineraryDay, Season, TravelStyle};
use crate::ports::CatalogProvider;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use utoipa::ToSchema;

pub const BUDGET_RANGE: RangeInclusive<u32> = 500..=5000;
pub const DURATION_RANGE: RangeInclusive<u8> = 3..=21;

/// What the visitor told the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TripPreferences {
    /// Euros.
    pub budget: u32,
    pub duration_days: u8,
    pub interests: Vec<Interest>,
    pub travel_style: TravelStyle,
    pub season: Season,
}

impl Default for TripPreferences {
    fn default() -> Self {
        Self {
            budget: 1500,
            duration_days: 7,
            interests: vec![Interest::NorthernLights, Interest::Hiking],
            travel_style: TravelStyle::BudgetBackpacker,
            season: Season::Spring,
        }
    }
}

/// How the itinerary total compares to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    UnderBudget { surplus: u64 },
    OnBudget,
    OverBudget { deficit: u64 },
}

impl BudgetStatus {
    pub fn compare(budget: u64, total_cost: u64) -> Self {
        match budget.cmp(&total_cost) {
            std::cmp::Ordering::Greater => BudgetStatus::UnderBudget {
                surplus: budget - total_cost,
            },
            std::cmp::Ordering::Equal => BudgetStatus::OnBudget,
            std::cmp::Ordering::Less => BudgetStatus::OverBudget {
                deficit: total_cost - budget,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TripPlan {
    pub title: String,
    pub days: Vec<ItineraryDay>,
    pub total_cost: u64,
    pub budget: u32,
    pub budget_status: BudgetStatus,
    pub preferences: TripPreferences,
}

/// Builds the itinerary for a set of preferences.
///
/// Only the budget influences the result, through the budget comparison.
pub fn generate_plan(preferences: TripPreferences, catalog: &dyn CatalogProvider) -> TripPlan {
    let days = catalog.itinerary().to_vec();
    let total_cost = days.iter().map(|d| u64::from(d.cost)).sum();

    TripPlan {
        title: catalog.itinerary_title().to_string(),
        days,
        total_cost,
        budget: preferences.budget,
        budget_status: BudgetStatus::compare(u64::from(preferences.budget), total_cost),
        preferences,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// Form controls of the Trip Planner page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlannerForm {
    pub budget: SliderRange,
    pub duration_days: SliderRange,
    pub interests: Vec<Interest>,
    pub travel_styles: Vec<TravelStyle>,
    pub seasons: Vec<Season>,
    pub defaults: TripPreferences,
}

impl PlannerForm {
    pub fn new() -> Self {
        let defaults = TripPreferences::default();
        Self {
            budget: SliderRange {
                min: *BUDGET_RANGE.start(),
                max: *BUDGET_RANGE.end(),
                default: defaults.budget,
            },
            duration_days: SliderRange {
                min: u32::from(*DURATION_RANGE.start()),
                max: u32::from(*DURATION_RANGE.end()),
                default: u32::from(defaults.duration_days),
            },
            interests: Interest::ALL.to_vec(),
            travel_styles: TravelStyle::ALL.to_vec(),
            seasons: Season::ALL.to_vec(),
            defaults,
        }
    }
}

impl Default for PlannerForm {
    fn default() -> Self {
        Self::new()
    }
}
