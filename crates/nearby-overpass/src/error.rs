use thiserror::Error;

/// Errors returned by the Overpass search client.
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Malformed search input (non-finite coordinate, zero radius). Raised
    /// before any network I/O is attempted.
    #[error(transparent)]
    InvalidParameter(#[from] nearby_core::CoreError),

    /// Network or TLS failure, timeout, or a non-2xx HTTP status from the
    /// Overpass endpoint.
    #[error("overpass query failed: {0}")]
    RemoteQueryFailed(#[from] reqwest::Error),

    /// A response arrived but could not be decoded into the expected shape.
    #[error("malformed overpass response for {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
