/// Runtime configuration, resolved from the environment by
/// [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Overpass interpreter endpoint the client POSTs queries to.
    pub overpass_url: String,
    /// End-to-end request deadline. Defaults to 25 s, matching the timeout
    /// declared inside the query text itself.
    pub request_timeout_secs: u64,
    /// Search radius used when the caller does not pass one.
    pub default_radius_meters: u32,
    /// Amenity tag searched when the caller does not pass one.
    pub default_category: String,
    pub user_agent: String,
}
