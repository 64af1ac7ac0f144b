//! HTTP client for the Overpass interpreter.
//!
//! Wraps `reqwest` with query construction, explicit timeouts, and typed
//! response handling. A search is one POST of the query text as a url-encoded
//! `data` form field, followed by a synchronous normalization pass over the
//! returned element list. There is no retry policy: transport and HTTP-level
//! failures surface to the caller unchanged as
//! [`OverpassError::RemoteQueryFailed`].

use std::time::Duration;

use reqwest::{Client, Url};

use nearby_core::{Coordinate, CoreError, PlaceRecord, SearchRequest};

use crate::error::OverpassError;
use crate::normalize::normalize_element;
use crate::query;
use crate::types::{OverpassResponse, RawElement};

const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Client for nearby-places searches against an Overpass endpoint.
///
/// Use [`OverpassClient::new`] for the public interpreter or
/// [`OverpassClient::with_endpoint`] to point at a mirror or a mock server in
/// tests. Holds no per-search state, so one client can serve concurrent
/// searches independently.
#[derive(Debug)]
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// Creates a client pointed at the public Overpass interpreter.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::RemoteQueryFailed`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, OverpassError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout_secs, user_agent)
    }

    /// Creates a client with a custom interpreter URL (mirrors, wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::RemoteQueryFailed`] if the underlying
    /// `reqwest::Client` cannot be constructed, or
    /// [`OverpassError::InvalidParameter`] if `endpoint` is not a valid URL.
    pub fn with_endpoint(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| {
            CoreError::InvalidParameter(format!("invalid endpoint URL '{endpoint}': {e}"))
        })?;

        Ok(Self { client, endpoint })
    }

    /// Searches for places of `category` within `radius_meters` of `center`.
    ///
    /// Returns normalized records in the order the store returned them;
    /// elements without a resolvable coordinate are dropped. An empty result
    /// set is a valid empty list, not an error.
    ///
    /// # Errors
    ///
    /// - [`OverpassError::InvalidParameter`] for a zero radius or a
    ///   non-finite/out-of-range center; no request is sent in that case.
    /// - [`OverpassError::RemoteQueryFailed`] on network failure, timeout, or
    ///   a non-2xx HTTP status.
    /// - [`OverpassError::MalformedResponse`] if the body is not the expected
    ///   JSON shape.
    pub async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<PlaceRecord>, OverpassError> {
        self.search_nearby_with_progress(center, radius_meters, category, |_| {})
            .await
    }

    /// Like [`OverpassClient::search_nearby`], reporting fractional progress
    /// across the normalization pass.
    ///
    /// For N returned elements, `on_progress` is called exactly N times with
    /// `(i + 1) / N`: monotonically increasing, ending at 1.0. It is never
    /// called when the store returns nothing. Progress tracks elements
    /// processed, not network transfer.
    ///
    /// # Errors
    ///
    /// Same as [`OverpassClient::search_nearby`].
    pub async fn search_nearby_with_progress<F>(
        &self,
        center: Coordinate,
        radius_meters: u32,
        category: &str,
        mut on_progress: F,
    ) -> Result<Vec<PlaceRecord>, OverpassError>
    where
        F: FnMut(f64),
    {
        let request = SearchRequest::new(center, radius_meters, category)?;
        let query = query::build(&request);

        tracing::debug!(
            category = %request.category,
            radius_m = request.radius_meters,
            lat = request.center.latitude,
            lon = request.center.longitude,
            "sending overpass query"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&[("data", query.as_str())])
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::MalformedResponse {
                context: format!("nearby search for '{category}'"),
                source: e,
            })?;

        Ok(Self::normalize_all(
            &parsed.elements,
            &request.category,
            &mut on_progress,
        ))
    }

    /// Runs the normalization pass in store order, reporting progress per
    /// element (including the ones that end up filtered out).
    #[allow(clippy::cast_precision_loss)]
    fn normalize_all(
        elements: &[RawElement],
        category: &str,
        on_progress: &mut dyn FnMut(f64),
    ) -> Vec<PlaceRecord> {
        let total = elements.len();
        let mut records = Vec::with_capacity(total);
        for (index, element) in elements.iter().enumerate() {
            on_progress((index + 1) as f64 / total as f64);
            if let Some(record) = normalize_element(element, category) {
                records.push(record);
            }
        }

        if records.len() < total {
            tracing::warn!(
                total,
                dropped = total - records.len(),
                "dropped elements without a resolvable coordinate"
            );
        }
        tracing::debug!(total, kept = records.len(), "normalized overpass elements");
        records
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
