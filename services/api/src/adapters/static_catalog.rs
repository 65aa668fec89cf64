//! services/api/src/adapters/static_catalog.rs
//!
//! The compiled-in sample catalog. It implements the `CatalogProvider` port from
//! the core crate, so a real data source can replace it without touching the
//! page handlers.

use nordic_explorer_core::domain::{
    Accommodation, AccommodationType, ActivityType, Adventure, Country, Destination,
    DestinationStats, Difficulty, ItineraryDay, MapPoint, Metric,
};
use nordic_explorer_core::ports::CatalogProvider;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// Holds every sample table, built once at startup.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    metrics: Vec<Metric>,
    destinations: Vec<Destination>,
    map_points: Vec<MapPoint>,
    adventures: Vec<Adventure>,
    accommodations: Vec<Accommodation>,
    itinerary: Vec<ItineraryDay>,
    destination_stats: Vec<DestinationStats>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            metrics: vec![
                Metric::new("🌍 Destinations", "247", Some("12 new")),
                Metric::new("🎿 Activities", "89", Some("5 added")),
                Metric::new("⭐ Avg Rating", "4.8/5", Some("0.2")),
                Metric::new("🧑‍🤝‍🧑 Happy Travelers", "15,432", Some("234")),
            ],
            destinations: vec![
                destination(Country::Norway, "Fjord Tours", "Jun-Aug", 1200, 4.9),
                destination(Country::Sweden, "Northern Lights", "Dec-Mar", 980, 4.7),
                destination(Country::Finland, "Lapland Adventures", "Dec-Mar", 850, 4.8),
                destination(Country::Denmark, "Copenhagen Culture", "May-Sep", 750, 4.6),
                destination(Country::Iceland, "Glacier Hiking", "Jun-Aug", 1400, 4.9),
            ],
            map_points: vec![
                map_point("Oslo", 60.4720, 8.4689, 45),
                map_point("Stockholm", 60.1282, 18.6435, 38),
                map_point("Helsinki", 61.9241, 25.7482, 32),
                map_point("Copenhagen", 56.2639, 9.5018, 28),
                map_point("Reykjavik", 64.9631, -19.0208, 52),
            ],
            adventures: vec![
                adventure(
                    "Lofoten Islands Hiking",
                    Country::Norway,
                    ActivityType::Hiking,
                    Difficulty::Moderate,
                    5,
                    899,
                    4.9,
                ),
                adventure(
                    "Northern Lights Safari",
                    Country::Finland,
                    ActivityType::Wildlife,
                    Difficulty::Easy,
                    3,
                    599,
                    4.8,
                ),
                adventure(
                    "Ice Hotel Experience",
                    Country::Sweden,
                    ActivityType::Cultural,
                    Difficulty::Easy,
                    2,
                    450,
                    4.7,
                ),
                adventure(
                    "Glacier Hiking",
                    Country::Iceland,
                    ActivityType::Hiking,
                    Difficulty::Challenging,
                    1,
                    180,
                    4.9,
                ),
                adventure(
                    "Fjord Kayaking",
                    Country::Norway,
                    ActivityType::WaterSports,
                    Difficulty::Moderate,
                    4,
                    720,
                    4.8,
                ),
                adventure(
                    "Reindeer Farm Visit",
                    Country::Finland,
                    ActivityType::Cultural,
                    Difficulty::Easy,
                    1,
                    120,
                    4.6,
                ),
            ],
            accommodations: vec![
                accommodation(
                    "Arctic TreeHouse Hotel",
                    "Rovaniemi, Finland",
                    Country::Finland,
                    AccommodationType::UniqueStay,
                    280,
                    4.9,
                    "🏔️",
                ),
                accommodation(
                    "Ice Hotel",
                    "Jukkasjärvi, Sweden",
                    Country::Sweden,
                    AccommodationType::UniqueStay,
                    320,
                    4.8,
                    "🧊",
                ),
                accommodation(
                    "Bergen Boutique Hotel",
                    "Bergen, Norway",
                    Country::Norway,
                    AccommodationType::Hotel,
                    150,
                    4.6,
                    "🏨",
                ),
                accommodation(
                    "Lakeside Cabin",
                    "Finnish Lakeland",
                    Country::Finland,
                    AccommodationType::Cabin,
                    120,
                    4.7,
                    "🏘️",
                ),
                accommodation(
                    "Northern Lights Lodge",
                    "Tromsø, Norway",
                    Country::Norway,
                    AccommodationType::Hotel,
                    200,
                    4.8,
                    "🌌",
                ),
                accommodation(
                    "Copenhagen Central Hostel",
                    "Copenhagen, Denmark",
                    Country::Denmark,
                    AccommodationType::Hostel,
                    75,
                    4.4,
                    "🏠",
                ),
            ],
            itinerary: vec![
                day(1, "Oslo", "City exploration & Viking Museum", 120),
                day(2, "Bergen", "Fjord cruise & Fish Market", 180),
                day(3, "Geiranger", "Geirangerfjord tour", 200),
                day(4, "Ålesund", "Art Nouveau architecture tour", 90),
                day(5, "Trondheim", "Nidaros Cathedral & Old Town", 110),
                day(6, "Tromsø", "Northern Lights hunting", 250),
                day(7, "Tromsø", "Husky sledding & departure", 180),
            ],
            destination_stats: vec![
                stats(Country::Norway, 1250, 250_000),
                stats(Country::Iceland, 980, 196_000),
                stats(Country::Sweden, 750, 150_000),
                stats(Country::Finland, 650, 130_000),
                stats(Country::Denmark, 420, 84_000),
            ],
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// `CatalogProvider` Trait Implementation
//=========================================================================================

impl CatalogProvider for StaticCatalog {
    fn headline_metrics(&self) -> &[Metric] {
        &self.metrics
    }

    fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    fn map_points(&self) -> &[MapPoint] {
        &self.map_points
    }

    fn adventures(&self) -> &[Adventure] {
        &self.adventures
    }

    fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    fn itinerary_title(&self) -> &str {
        "🗓️ 7-Day Norway Adventure"
    }

    fn itinerary(&self) -> &[ItineraryDay] {
        &self.itinerary
    }

    fn destination_stats(&self) -> &[DestinationStats] {
        &self.destination_stats
    }
}

//=========================================================================================
// Row Builders
//=========================================================================================

fn destination(country: Country, activity: &str, season: &str, avg_cost: u32, rating: f32) -> Destination {
    Destination {
        country,
        popular_activity: activity.to_string(),
        best_season: season.to_string(),
        avg_cost,
        rating,
    }
}

fn map_point(city: &str, lat: f64, lon: f64, adventures: u32) -> MapPoint {
    MapPoint {
        city: city.to_string(),
        lat,
        lon,
        adventures,
    }
}

fn adventure(
    name: &str,
    country: Country,
    activity: ActivityType,
    difficulty: Difficulty,
    duration_days: u8,
    price: u32,
    rating: f32,
) -> Adventure {
    Adventure {
        name: name.to_string(),
        country,
        activity,
        difficulty,
        duration_days,
        price,
        rating,
    }
}

fn accommodation(
    name: &str,
    location: &str,
    country: Country,
    kind: AccommodationType,
    price_per_night: u32,
    rating: f32,
    icon: &str,
) -> Accommodation {
    Accommodation {
        name: name.to_string(),
        location: location.to_string(),
        country,
        kind,
        price_per_night,
        rating,
        icon: icon.to_string(),
    }
}

fn day(day: u8, location: &str, activity: &str, cost: u32) -> ItineraryDay {
    ItineraryDay {
        day,
        location: location.to_string(),
        activity: activity.to_string(),
        cost,
    }
}

fn stats(destination: Country, bookings: u32, revenue: u64) -> DestinationStats {
    DestinationStats {
        destination,
        bookings,
        revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nordic_explorer_core::filter::{filter_accommodations, filter_adventures, PriceRange};
    use nordic_explorer_core::{generate_plan, AccommodationFilter, AdventureFilter, TripPreferences};

    #[test]
    fn norway_filter_returns_the_two_norwegian_adventures() {
        let catalog = StaticCatalog::new();
        let filter = AdventureFilter {
            country: Some(Country::Norway),
            ..Default::default()
        };

        let result = filter_adventures(catalog.adventures(), &filter);

        let names: Vec<_> = result.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Lofoten Islands Hiking", "Fjord Kayaking"]);
    }

    #[test]
    fn unconstrained_filters_return_entire_catalog() {
        let catalog = StaticCatalog::new();
        assert_eq!(
            filter_adventures(catalog.adventures(), &AdventureFilter::default()).len(),
            6
        );
        assert_eq!(
            filter_accommodations(catalog.accommodations(), &AccommodationFilter::default()).len(),
            6
        );
    }

    #[test]
    fn default_price_slider_hides_budget_and_premium_stays() {
        let catalog = StaticCatalog::new();
        let filter = AccommodationFilter {
            price: Some(PriceRange::new(100, 300).unwrap()),
            ..Default::default()
        };

        let result = filter_accommodations(catalog.accommodations(), &filter);

        let names: Vec<_> = result.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Arctic TreeHouse Hotel",
                "Bergen Boutique Hotel",
                "Lakeside Cabin",
                "Northern Lights Lodge",
            ]
        );
    }

    #[test]
    fn seven_day_itinerary_costs_1130() {
        let plan = generate_plan(TripPreferences::default(), &StaticCatalog::new());
        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.total_cost, 1130);
    }

    #[test]
    fn catalog_lookups_match_by_exact_name() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.find_adventure("Glacier Hiking").map(|a| a.price), Some(180));
        assert_eq!(catalog.find_accommodation("Ice Hotel").map(|a| a.price_per_night), Some(320));
        assert!(catalog.find_adventure("glacier hiking").is_none());
    }
}
