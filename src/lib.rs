//! lead-relay: a business lead search relay for the Google Places API
//!
//! Accepts a free-text query, pages through Places text search and enriches
//! every result with a place details lookup.

pub mod config;
pub mod error;
pub mod metrics;
pub mod network;
pub mod places;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::{PlacesError, RelayError};
pub use places::PlacesApi;
pub use search::{EnrichedPlace, SearchRelay, SearchResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for upstream requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;
