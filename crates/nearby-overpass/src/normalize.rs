//! Normalization of raw Overpass elements into [`PlaceRecord`]s.
//!
//! The fallback rules form a fixed priority list:
//! - coordinate: direct `lat`/`lon` before nested `center`;
//! - title: `name` tag before `"<category> #<id>"`;
//! - description: `cuisine` before `description` before empty;
//! - category: the element's own `amenity` tag before the searched category;
//! - address: `addr:street` before empty.

use nearby_core::{Coordinate, PlaceRecord};

use crate::types::RawElement;

/// Converts one raw element into a place record.
///
/// Returns `None` when neither coordinate source resolves; such elements are
/// silently dropped from search results rather than treated as errors. An
/// element with a coordinate but no tags at all still yields a fully
/// default-filled record.
#[must_use]
pub fn normalize_element(element: &RawElement, fallback_category: &str) -> Option<PlaceRecord> {
    let coordinate = resolve_coordinate(element)?;

    let title = element
        .tags
        .get("name")
        .cloned()
        .unwrap_or_else(|| format!("{fallback_category} #{}", element.id));
    let description = element
        .tags
        .get("cuisine")
        .or_else(|| element.tags.get("description"))
        .cloned()
        .unwrap_or_default();
    let category = element
        .tags
        .get("amenity")
        .cloned()
        .unwrap_or_else(|| fallback_category.to_string());
    let address = element.tags.get("addr:street").cloned().unwrap_or_default();

    Some(PlaceRecord {
        id: element.id,
        coordinate,
        title,
        description,
        category,
        address,
    })
}

/// Direct fields win over the nested center; `None` when both are absent.
fn resolve_coordinate(element: &RawElement) -> Option<Coordinate> {
    if let (Some(lat), Some(lon)) = (element.lat, element.lon) {
        return Some(Coordinate {
            latitude: lat,
            longitude: lon,
        });
    }
    element.center.as_ref().map(|c| Coordinate {
        latitude: c.lat,
        longitude: c.lon,
    })
}
