//! The static place-category catalog.
//!
//! A fixed table initialized at compile time and never mutated. The `key` is
//! the OpenStreetMap `amenity` value used as the search filter; `label` and
//! `color` are display hints for whatever front-end renders the results.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const CATALOG: &[CategoryDescriptor] = &[
    CategoryDescriptor {
        key: "restaurant",
        label: "🍽️ Restaurants",
        color: "red",
    },
    CategoryDescriptor {
        key: "cafe",
        label: "☕ Cafes",
        color: "orange",
    },
    CategoryDescriptor {
        key: "hotel",
        label: "🏨 Hotels",
        color: "blue",
    },
    CategoryDescriptor {
        key: "tourist_attraction",
        label: "🎯 Attractions",
        color: "green",
    },
    CategoryDescriptor {
        key: "hospital",
        label: "🏥 Hospitals",
        color: "red",
    },
    CategoryDescriptor {
        key: "pharmacy",
        label: "💊 Pharmacies",
        color: "green",
    },
    CategoryDescriptor {
        key: "bank",
        label: "🏦 Banks",
        color: "blue",
    },
    CategoryDescriptor {
        key: "fuel",
        label: "⛽ Fuel stations",
        color: "yellow",
    },
];

/// Returns the category catalog, in stable display order.
#[must_use]
pub fn categories() -> &'static [CategoryDescriptor] {
    CATALOG
}

/// Looks up a catalog entry by its amenity key.
#[must_use]
pub fn category_by_key(key: &str) -> Option<&'static CategoryDescriptor> {
    CATALOG.iter().find(|c| c.key == key)
}
