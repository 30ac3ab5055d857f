//! Search orchestration module
//!
//! Paginates the upstream text search, enriches each place with its
//! details and shapes the combined response.

mod executor;
mod models;

pub use executor::{Pacer, SearchRelay, TokioPacer};
pub use models::*;
