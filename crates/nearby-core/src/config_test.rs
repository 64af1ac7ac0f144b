use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_environment_yields_defaults() {
    let env = HashMap::new();
    let config = build_app_config(lookup_from_map(&env)).unwrap();

    assert_eq!(
        config.overpass_url,
        "https://overpass-api.de/api/interpreter"
    );
    assert_eq!(config.request_timeout_secs, 25);
    assert_eq!(config.default_radius_meters, 2000);
    assert_eq!(config.default_category, "restaurant");
    assert!(config.user_agent.starts_with("nearby/"));
}

#[test]
fn overrides_are_honored() {
    let mut env = HashMap::new();
    env.insert("NEARBY_OVERPASS_URL", "http://localhost:8080/interpreter");
    env.insert("NEARBY_REQUEST_TIMEOUT_SECS", "5");
    env.insert("NEARBY_DEFAULT_RADIUS_M", "750");
    env.insert("NEARBY_DEFAULT_CATEGORY", "pharmacy");

    let config = build_app_config(lookup_from_map(&env)).unwrap();

    assert_eq!(config.overpass_url, "http://localhost:8080/interpreter");
    assert_eq!(config.request_timeout_secs, 5);
    assert_eq!(config.default_radius_meters, 750);
    assert_eq!(config.default_category, "pharmacy");
}

#[test]
fn unparseable_timeout_is_rejected() {
    let mut env = HashMap::new();
    env.insert("NEARBY_REQUEST_TIMEOUT_SECS", "soon");

    let err = build_app_config(lookup_from_map(&env)).unwrap_err();
    match err {
        ConfigError::InvalidEnvVar { var, .. } => {
            assert_eq!(var, "NEARBY_REQUEST_TIMEOUT_SECS");
        }
    }
}

#[test]
fn zero_default_radius_is_rejected() {
    let mut env = HashMap::new();
    env.insert("NEARBY_DEFAULT_RADIUS_M", "0");

    let err = build_app_config(lookup_from_map(&env)).unwrap_err();
    match err {
        ConfigError::InvalidEnvVar { var, .. } => {
            assert_eq!(var, "NEARBY_DEFAULT_RADIUS_M");
        }
    }
}
