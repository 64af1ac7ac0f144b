//! Overpass QL construction.
//!
//! Pure text assembly over an already-validated [`SearchRequest`]; all input
//! checking happens in [`SearchRequest::new`], so the builder is total.

use nearby_core::SearchRequest;

/// Timeout declared in the query header, in seconds. The default HTTP request
/// deadline (`NEARBY_REQUEST_TIMEOUT_SECS`) matches this value.
pub const QUERY_TIMEOUT_SECS: u64 = 25;

/// Builds the Overpass QL text for a nearby-places search.
///
/// The query unions all three geometry kinds (node, way, relation) filtered by
/// the request's amenity tag within `radius_meters` of the center, and asks
/// for centroid coordinates (`out center`) so non-point geometries still
/// resolve to a single marker position, plus metadata.
#[must_use]
pub fn build(request: &SearchRequest) -> String {
    let SearchRequest {
        center,
        radius_meters,
        category,
    } = request;
    let (lat, lon) = (center.latitude, center.longitude);

    format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n\
         (\n\
         \x20\x20node[\"amenity\"=\"{category}\"](around:{radius_meters},{lat},{lon});\n\
         \x20\x20way[\"amenity\"=\"{category}\"](around:{radius_meters},{lat},{lon});\n\
         \x20\x20relation[\"amenity\"=\"{category}\"](around:{radius_meters},{lat},{lon});\n\
         );\n\
         out center meta;"
    )
}
