//! Places upstream module
//!
//! Defines the PlacesApi trait, the wire types of the Places endpoints and
//! the Google-backed implementation.

mod google;
mod models;
mod traits;

pub use google::GooglePlaces;
pub use models::*;
pub use traits::PlacesApi;
