//! Application state shared across handlers

use crate::config::Settings;
use crate::metrics::Metrics;
use crate::network::HttpClient;
use crate::places::GooglePlaces;
use crate::search::SearchRelay;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search relay; absent when no API key is configured
    pub search: Option<Arc<SearchRelay>>,
    /// Relay counters
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Create application state backed by Google Places
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let metrics = Arc::new(Metrics::new());
        let search = settings.places.api_key.as_ref().map(|key| {
            let places = GooglePlaces::new(client, key.clone(), &settings.places);
            Arc::new(
                SearchRelay::new(Arc::new(places), &settings.places)
                    .with_metrics(metrics.clone()),
            )
        });

        Self {
            settings: Arc::new(settings),
            search,
            metrics,
        }
    }

    /// Create application state around an existing relay
    pub fn with_relay(settings: Settings, relay: Option<SearchRelay>) -> Self {
        let relay = relay.map(Arc::new);
        let metrics = relay
            .as_ref()
            .map(|r| r.metrics().clone())
            .unwrap_or_else(|| Arc::new(Metrics::new()));

        Self {
            settings: Arc::new(settings),
            search: relay,
            metrics,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Whether the search route can serve requests
    pub fn search_available(&self) -> bool {
        self.search.is_some()
    }
}
