//! crates/nordic_explorer_core/src/analytics.rs
//!
//! Sample platform analytics. The daily series is random and regenerated on
//! every render; the destination breakdown comes from the catalog.

use crate::domain::DestinationStats;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};
use serde::Serialize;
use utoipa::ToSchema;

/// Calendar year covered by the generated series.
pub const SERIES_YEAR: i32 = 2024;

const BOOKINGS_MEAN: f64 = 15.0;
const BOOKINGS_FLOOR: u32 = 5;
const REVENUE_MEAN: f64 = 2500.0;
const REVENUE_STD_DEV: f64 = 500.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("invalid sampling distribution: {0}")]
    Distribution(String),
    #[error("invalid series year {0}")]
    Year(i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub bookings: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MonthlyRevenue {
    /// 1 = January.
    pub month: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AnalyticsReport {
    pub daily: Vec<DailyPoint>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub popular_destinations: Vec<DestinationStats>,
}

/// Generates one year of daily bookings and revenue plus the monthly rollup.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    popular_destinations: &[DestinationStats],
) -> Result<AnalyticsReport, AnalyticsError> {
    let bookings = Poisson::new(BOOKINGS_MEAN)
        .map_err(|e| AnalyticsError::Distribution(e.to_string()))?;
    let revenue = Normal::new(REVENUE_MEAN, REVENUE_STD_DEV)
        .map_err(|e| AnalyticsError::Distribution(e.to_string()))?;
    let first_day =
        NaiveDate::from_ymd_opt(SERIES_YEAR, 1, 1).ok_or(AnalyticsError::Year(SERIES_YEAR))?;

    let daily: Vec<DailyPoint> = first_day
        .iter_days()
        .take_while(|date| date.year() == SERIES_YEAR)
        .map(|date| DailyPoint {
            date,
            bookings: bookings.sample(rng) as u32 + BOOKINGS_FLOOR,
            revenue: revenue.sample(rng),
        })
        .collect();

    let mut monthly = [0.0_f64; 12];
    for point in &daily {
        monthly[point.date.month0() as usize] += point.revenue;
    }

    Ok(AnalyticsReport {
        daily,
        monthly_revenue: monthly
            .iter()
            .zip(1..)
            .map(|(revenue, month)| MonthlyRevenue {
                month,
                revenue: *revenue,
            })
            .collect(),
        popular_destinations: popular_destinations.to_vec(),
    })
}
