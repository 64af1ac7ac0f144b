pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use normalize::normalize_element;
pub use types::{Center, OverpassResponse, RawElement};
