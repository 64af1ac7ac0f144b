//! Domain types shared across the workspace.
//!
//! [`SearchRequest::new`] is the single validation point for search input:
//! anything downstream of it (query building, the HTTP client) may assume the
//! coordinate is finite and in range and the radius is positive.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Default search radius in meters when the caller does not supply one.
pub const DEFAULT_RADIUS_METERS: u32 = 2000;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated nearby-places search: center, radius, and category tag.
///
/// The category is an opaque tag matched against the store's `amenity`
/// attribute; it is NOT checked against the [`crate::categories`] catalog, and
/// callers align the two by convention.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub center: Coordinate,
    pub radius_meters: u32,
    pub category: String,
}

impl SearchRequest {
    /// Validates and constructs a search request.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] if the latitude is outside
    /// [-90, 90], the longitude is outside [-180, 180], either is non-finite,
    /// or the radius is zero.
    pub fn new(
        center: Coordinate,
        radius_meters: u32,
        category: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if !center.latitude.is_finite() || !(-90.0..=90.0).contains(&center.latitude) {
            return Err(CoreError::InvalidParameter(format!(
                "latitude {} is not a finite value in [-90, 90]",
                center.latitude
            )));
        }
        if !center.longitude.is_finite() || !(-180.0..=180.0).contains(&center.longitude) {
            return Err(CoreError::InvalidParameter(format!(
                "longitude {} is not a finite value in [-180, 180]",
                center.longitude
            )));
        }
        if radius_meters == 0 {
            return Err(CoreError::InvalidParameter(
                "radius must be a positive number of meters".to_string(),
            ));
        }

        Ok(Self {
            center,
            radius_meters,
            category: category.into(),
        })
    }
}

/// A normalized place, ready for display as a map marker or list row.
///
/// The coordinate is always present: raw elements without a resolvable
/// coordinate are dropped during normalization and never become records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub id: i64,
    pub coordinate: Coordinate,
    /// Tagged name, or `"<category> #<id>"` for untagged elements.
    pub title: String,
    /// Cuisine or free-form description tag; empty when neither is present.
    pub description: String,
    /// The store's own category tag when present, else the searched category.
    pub category: String,
    /// Street from the address tags; empty when absent.
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> Coordinate {
        Coordinate {
            latitude: 52.52,
            longitude: 13.405,
        }
    }

    #[test]
    fn new_accepts_valid_input() {
        let request = SearchRequest::new(center(), DEFAULT_RADIUS_METERS, "cafe").unwrap();
        assert_eq!(request.radius_meters, 2000);
        assert_eq!(request.category, "cafe");
    }

    #[test]
    fn new_rejects_zero_radius() {
        let err = SearchRequest::new(center(), 0, "cafe").unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn new_rejects_non_finite_latitude() {
        let bad = Coordinate {
            latitude: f64::NAN,
            longitude: 13.405,
        };
        assert!(SearchRequest::new(bad, 500, "cafe").is_err());

        let bad = Coordinate {
            latitude: f64::INFINITY,
            longitude: 13.405,
        };
        assert!(SearchRequest::new(bad, 500, "cafe").is_err());
    }

    #[test]
    fn new_rejects_out_of_range_coordinates() {
        let bad = Coordinate {
            latitude: 90.1,
            longitude: 0.0,
        };
        assert!(SearchRequest::new(bad, 500, "cafe").is_err());

        let bad = Coordinate {
            latitude: 0.0,
            longitude: -180.5,
        };
        assert!(SearchRequest::new(bad, 500, "cafe").is_err());
    }

    #[test]
    fn place_record_serializes_with_nested_coordinate() {
        let record = PlaceRecord {
            id: 42,
            coordinate: Coordinate {
                latitude: 10.0,
                longitude: 20.0,
            },
            title: "Cafe X".to_string(),
            description: String::new(),
            category: "cafe".to_string(),
            address: String::new(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["coordinate"]["latitude"], 10.0);
        assert_eq!(value["coordinate"]["longitude"], 20.0);
        assert_eq!(value["title"], "Cafe X");
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        let edge = Coordinate {
            latitude: -90.0,
            longitude: 180.0,
        };
        assert!(SearchRequest::new(edge, 1, "fuel").is_ok());
    }
}
