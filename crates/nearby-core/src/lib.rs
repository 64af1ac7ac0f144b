pub mod app_config;
pub mod categories;
pub mod config;
mod types;

pub use app_config::AppConfig;
pub use categories::{categories, category_by_key, CategoryDescriptor};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use types::{Coordinate, PlaceRecord, SearchRequest, DEFAULT_RADIUS_METERS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
