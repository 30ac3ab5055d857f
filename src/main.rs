//! lead-relay: business lead search relay
//!
//! This is the main entry point for the application.

use anyhow::Result;
use lead_relay::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so debug mode can pick the log level
    let loaded = config::load()?;
    let settings = loaded.settings;

    // Initialize logging
    let default_level = if settings.general.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting lead-relay v{}", lead_relay::VERSION);

    if let Some(path) = loaded.env_file {
        info!("Loaded environment from: {}", path.display());
    }
    match loaded.settings_file {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    match settings.places.api_key_hint() {
        Some(hint) => info!("GOOGLE_PLACES_API_KEY loaded (first few chars): {}", hint),
        None => error!("GOOGLE_PLACES_API_KEY is not set; /search will reject requests"),
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let state = AppState::new(settings, client);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
