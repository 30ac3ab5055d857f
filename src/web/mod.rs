//! Web server module
//!
//! Provides the HTTP API of lead-relay.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
