//! Overpass API response types.
//!
//! The interpreter returns `{"elements": [...]}` where each element is one of
//! three geometry kinds. Nodes carry `lat`/`lon` directly; ways and relations
//! queried with `out center` carry them under a nested `center` object. Tags
//! are a free-form string map and may be missing entirely. All of that
//! optionality is modeled explicitly here; presence is resolved during
//! normalization, never assumed at deserialization time.

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level envelope for an Overpass interpreter response.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<RawElement>,
}

/// One raw match, prior to normalization.
///
/// Exactly one of the direct `lat`/`lon` pair or the nested [`Center`] is
/// expected to be populated, but neither is guaranteed: relations without
/// resolvable geometry can lack both.
#[derive(Debug, Deserialize)]
pub struct RawElement {
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Centroid coordinate attached to way/relation elements by `out center`.
#[derive(Debug, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}
