//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Main routes
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        // API routes
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        // Add middleware
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(cors)
        // Add state
        .with_state(state)
}
