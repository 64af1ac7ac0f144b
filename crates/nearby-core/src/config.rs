use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
///
/// Every variable has a default, so an empty environment yields a valid
/// production configuration.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let overpass_url = or_default(
        "NEARBY_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let request_timeout_secs = parse_u64("NEARBY_REQUEST_TIMEOUT_SECS", "25")?;
    let default_radius_meters = parse_u32("NEARBY_DEFAULT_RADIUS_M", "2000")?;
    let default_category = or_default("NEARBY_DEFAULT_CATEGORY", "restaurant");
    let user_agent = or_default("NEARBY_USER_AGENT", "nearby/0.1 (nearby-places search)");

    if default_radius_meters == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEARBY_DEFAULT_RADIUS_M".to_string(),
            reason: "radius must be positive".to_string(),
        });
    }

    Ok(AppConfig {
        overpass_url,
        request_timeout_secs,
        default_radius_meters,
        default_category,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
