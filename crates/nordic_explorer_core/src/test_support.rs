use crate::domain::{
    Accommodation, AccommodationType, ActivityType, Adventure, Country, Destination,
    DestinationStats, Difficulty, ItineraryDay, MapPoint, Metric,
};
use crate::ports::CatalogProvider;

// Small in-memory catalog shared by the core unit tests.
pub(crate) struct FixtureCatalog {
    metrics: Vec<Metric>,
    destinations: Vec<Destination>,
    map_points: Vec<MapPoint>,
    adventures: Vec<Adventure>,
    accommodations: Vec<Accommodation>,
    itinerary: Vec<ItineraryDay>,
    stats: Vec<DestinationStats>,
}

impl FixtureCatalog {
    pub(crate) fn new() -> Self {
        let day = |day, location: &str, cost| ItineraryDay {
            day,
            location: location.to_string(),
            activity: "Sightseeing".to_string(),
            cost,
        };

        Self {
            metrics: vec![Metric::new("Destinations", "3", Some("1 new"))],
            destinations: vec![Destination {
                country: Country::Norway,
                popular_activity: "Fjord Tours".to_string(),
                best_season: "Jun-Aug".to_string(),
                avg_cost: 1200,
                rating: 4.9,
            }],
            map_points: vec![MapPoint {
                city: "Oslo".to_string(),
                lat: 60.0,
                lon: 8.0,
                adventures: 4,
            }],
            adventures: vec![
                Adventure {
                    name: "Coastal Walk".to_string(),
                    country: Country::Norway,
                    activity: ActivityType::Hiking,
                    difficulty: Difficulty::Moderate,
                    duration_days: 3,
                    price: 300,
                    rating: 4.5,
                },
                Adventure {
                    name: "Sauna Tour".to_string(),
                    country: Country::Finland,
                    activity: ActivityType::Cultural,
                    difficulty: Difficulty::Easy,
                    duration_days: 1,
                    price: 90,
                    rating: 4.2,
                },
            ],
            accommodations: vec![Accommodation {
                name: "Harbour Hostel".to_string(),
                location: "Bergen, Norway".to_string(),
                country: Country::Norway,
                kind: AccommodationType::Hostel,
                price_per_night: 60,
                rating: 4.1,
                icon: "🏠".to_string(),
            }],
            itinerary: vec![day(1, "Oslo", 120), day(2, "Bergen", 180), day(3, "Bergen", 200)],
            stats: vec![DestinationStats {
                destination: Country::Norway,
                bookings: 10,
                revenue: 2000,
            }],
        }
    }
}

impl CatalogProvider for FixtureCatalog {
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
        "3-Day Test Trip"
    }

    fn itinerary(&self) -> &[ItineraryDay] {
        &self.itinerary
    }

    fn destination_stats(&self) -> &[DestinationStats] {
        &self.stats
    }
}
