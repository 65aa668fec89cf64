//! crates/nordic_explorer_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application: the catalog
//! entities offered by the site, the items a visitor puts in a cart, and the
//! small closed vocabularies (countries, activity types, pages...) shared by
//! filters, the router and the page views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

//=========================================================================================
// Labelled Vocabularies
//=========================================================================================

/// Returned when a free-text label does not name any variant of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{label}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Declares a closed vocabulary whose variants serialize as their display label
/// and parse back from it, case-insensitively.
macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownLabel {
                        kind: stringify!($name),
                        label: wanted.to_string(),
                    })
            }
        }
    };
}

labelled_enum!(
    /// Nordic countries covered by the catalog.
    Country {
        Norway => "Norway",
        Sweden => "Sweden",
        Finland => "Finland",
        Denmark => "Denmark",
        Iceland => "Iceland",
    }
);

labelled_enum!(
    ActivityType {
        WinterSports => "Winter Sports",
        Hiking => "Hiking",
        WaterSports => "Water Sports",
        Cultural => "Cultural",
        Wildlife => "Wildlife",
    }
);

labelled_enum!(
    Difficulty {
        Easy => "Easy",
        Moderate => "Moderate",
        Challenging => "Challenging",
        Expert => "Expert",
    }
);

labelled_enum!(
    AccommodationType {
        Hotel => "Hotel",
        Cabin => "Cabin",
        Hostel => "Hostel",
        UniqueStay => "Unique Stay",
    }
);

labelled_enum!(
    /// Interface languages offered by the selector. Content is never translated.
    Language {
        English => "English",
        Svenska => "Svenska",
        Norsk => "Norsk",
        Suomi => "Suomi",
    }
);

impl Language {
    /// ISO 639-1 code for the language.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Svenska => "sv",
            Language::Norsk => "no",
            Language::Suomi => "fi",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

labelled_enum!(
    /// The six navigation states of the dashboard.
    Page {
        Home => "Home",
        TripPlanner => "Trip Planner",
        Adventures => "Adventures",
        Accommodations => "Accommodations",
        Analytics => "Analytics",
        Booking => "Booking",
    }
);

impl Page {
    /// Sidebar icon shown in front of the label.
    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::TripPlanner => "🗺️",
            Page::Adventures => "🏔️",
            Page::Accommodations => "🏨",
            Page::Analytics => "📊",
            Page::Booking => "💳",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

labelled_enum!(
    PaymentMethod {
        CreditCard => "Credit Card",
        PayPal => "PayPal",
        BankTransfer => "Bank Transfer",
    }
);

labelled_enum!(
    Interest {
        NorthernLights => "Northern Lights",
        FjordTours => "Fjord Tours",
        Hiking => "Hiking",
        WinterSports => "Winter Sports",
        CulturalSites => "Cultural Sites",
        FoodAndDrink => "Food & Drink",
        Wildlife => "Wildlife",
        Photography => "Photography",
    }
);

labelled_enum!(
    TravelStyle {
        BudgetBackpacker => "Budget Backpacker",
        MidRangeExplorer => "Mid-range Explorer",
        LuxuryTraveler => "Luxury Traveler",
    }
);

labelled_enum!(
    Season {
        Spring => "Spring (Mar-May)",
        Summer => "Summer (Jun-Aug)",
        Autumn => "Autumn (Sep-Nov)",
        Winter => "Winter (Dec-Feb)",
    }
);

//=========================================================================================
// Cart
//=========================================================================================

/// A single product a visitor intends to purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    /// Identifies the product; removal matches on it.
    pub name: String,
    pub details: String,
    /// Whole euros.
    pub price: u32,
}

impl CartItem {
    pub fn new(name: impl Into<String>, details: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
            price,
        }
    }
}

//=========================================================================================
// Catalog Entities
//=========================================================================================

/// A bookable guided adventure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Adventure {
    pub name: String,
    pub country: Country,
    pub activity: ActivityType,
    pub difficulty: Difficulty,
    pub duration_days: u8,
    pub price: u32,
    pub rating: f32,
}

impl Adventure {
    /// "1 day", "5 days".
    pub fn duration_label(&self) -> String {
        match self.duration_days {
            1 => "1 day".to_string(),
            n => format!("{n} days"),
        }
    }

    /// Converts the adventure into the item placed in a cart.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.name.clone(), self.duration_label(), self.price)
    }
}

/// A place to stay, priced per night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Accommodation {
    pub name: String,
    /// Free-text location as shown to visitors, e.g. "Bergen, Norway".
    pub location: String,
    pub country: Country,
    pub kind: AccommodationType,
    pub price_per_night: u32,
    pub rating: f32,
    pub icon: String,
}

impl Accommodation {
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.name.clone(),
            format!("{} • {} • per night", self.location, self.kind),
            self.price_per_night,
        )
    }
}

/// A featured destination on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Destination {
    pub country: Country,
    pub popular_activity: String,
    pub best_season: String,
    pub avg_cost: u32,
    pub rating: f32,
}

/// A marker on the adventure map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MapPoint {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub adventures: u32,
}

/// One day of a suggested itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItineraryDay {
    pub day: u8,
    pub location: String,
    pub activity: String,
    pub cost: u32,
}

/// Historic booking volume for one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DestinationStats {
    pub destination: Country,
    pub bookings: u32,
    pub revenue: u64,
}

/// A headline number with an optional change indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, delta: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            delta: delta.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("water sports".parse::<ActivityType>(), Ok(ActivityType::WaterSports));
        assert_eq!(" Unique Stay ".parse::<AccommodationType>(), Ok(AccommodationType::UniqueStay));
        assert_eq!("trip planner".parse::<Page>(), Ok(Page::TripPlanner));
    }

    #[test]
    fn unknown_label_names_the_vocabulary() {
        let err = "Atlantis".parse::<Country>().unwrap_err();
        assert_eq!(err.kind, "Country");
        assert_eq!(err.to_string(), "unknown Country: 'Atlantis'");
    }

    #[test]
    fn adventure_cart_item_uses_duration_as_details() {
        let adventure = Adventure {
            name: "Glacier Hiking".to_string(),
            country: Country::Iceland,
            activity: ActivityType::Hiking,
            difficulty: Difficulty::Challenging,
            duration_days: 1,
            price: 180,
            rating: 4.9,
        };

        assert_eq!(
            adventure.to_cart_item(),
            CartItem::new("Glacier Hiking", "1 day", 180)
        );
    }

    #[test]
    fn language_codes_match_selector() {
        let codes: Vec<_> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["en", "sv", "no", "fi"]);
        assert_eq!(Language::default(), Language::English);
    }
}
