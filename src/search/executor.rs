//! Search execution: text search pagination followed by per-place enrichment

use super::models::{EnrichedPlace, SearchResponse};
use crate::config::PlacesSettings;
use crate::error::RelayError;
use crate::metrics::Metrics;
use crate::places::{ApiStatus, DetailsResponse, PlacesApi, RawPlace};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Waits out the delay before a pagination token may be used
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Pacer backed by the tokio timer
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Result of the pagination phase
#[derive(Debug)]
enum Collected {
    ZeroResults,
    Places(Vec<RawPlace>),
}

/// Relays a query to the places backend and enriches every result
pub struct SearchRelay {
    places: Arc<dyn PlacesApi>,
    pacer: Arc<dyn Pacer>,
    metrics: Arc<Metrics>,
    max_pages: u32,
    page_token_delay: Duration,
}

impl SearchRelay {
    /// Create a new relay over a places backend
    pub fn new(places: Arc<dyn PlacesApi>, settings: &PlacesSettings) -> Self {
        Self {
            places,
            pacer: Arc::new(TokioPacer),
            metrics: Arc::new(Metrics::new()),
            max_pages: settings.max_pages,
            page_token_delay: settings.page_token_delay(),
        }
    }

    /// Replace the pacer used between pages
    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Share a metrics collector
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    /// Run a full search: paginate, then enrich each place in order
    pub async fn search(&self, query: &str) -> Result<SearchResponse, RelayError> {
        self.metrics.inc_search();

        let raw_places = match self.collect(query).await? {
            Collected::ZeroResults => {
                info!("Text Search returned ZERO_RESULTS for query: {}", query);
                return Ok(SearchResponse::zero_results());
            }
            Collected::Places(places) if places.is_empty() => {
                info!(
                    "No places found after pagination attempts for query: {}",
                    query
                );
                return Ok(SearchResponse::zero_results());
            }
            Collected::Places(places) => places,
        };

        info!(
            "Total raw places fetched from Text Search: {}",
            raw_places.len()
        );

        let mut enriched = Vec::with_capacity(raw_places.len());
        for raw in raw_places {
            enriched.push(self.enrich(raw).await);
        }

        Ok(SearchResponse::ok(enriched))
    }

    /// Fetch up to `max_pages` text search pages
    async fn collect(&self, query: &str) -> Result<Collected, RelayError> {
        let mut collected: Vec<RawPlace> = Vec::new();
        let mut page_token: Option<String> = None;

        for page_no in 1..=self.max_pages {
            if page_token.is_some() {
                debug!(
                    "Waiting {:?} before using next_page_token",
                    self.page_token_delay
                );
                self.pacer.pause(self.page_token_delay).await;
            }

            info!(
                "Performing Text Search (page {}) with query: {}",
                page_no, query
            );
            let page = match self.places.text_search(query, page_token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    error!("Network error calling Google Places API: {}", e);
                    self.metrics.record_upstream_error();
                    return Err(e.into());
                }
            };
            self.metrics.record_page();

            match page.status {
                ApiStatus::Ok => {
                    collected.extend(page.results);
                    page_token = page.next_page_token.filter(|t| !t.is_empty());
                    if page_token.is_none() {
                        debug!("No more next_page_token found. Stopping pagination.");
                        break;
                    }
                }
                ApiStatus::ZeroResults if page_no == 1 => return Ok(Collected::ZeroResults),
                status => {
                    let message = page.error_message.unwrap_or_default();
                    error!(
                        "Text Search API error (page {}): {} - {}",
                        page_no, status, message
                    );
                    if collected.is_empty() {
                        self.metrics.record_upstream_error();
                        return Err(RelayError::Upstream {
                            status: status.to_string(),
                            message,
                        });
                    }
                    warn!(
                        "Error on page {}, proceeding with {} fetched results",
                        page_no,
                        collected.len()
                    );
                    self.metrics.record_partial();
                    break;
                }
            }
        }

        Ok(Collected::Places(collected))
    }

    /// Build the output record for one text search result
    async fn enrich(&self, raw: RawPlace) -> EnrichedPlace {
        let Some(place_id) = raw.place_id.clone().filter(|id| !id.is_empty()) else {
            return EnrichedPlace::missing_id(raw);
        };

        self.metrics.record_detail_lookup();
        match self.places.place_details(&place_id).await {
            Ok(DetailsResponse {
                status: ApiStatus::Ok,
                result: Some(details),
                ..
            }) => EnrichedPlace::from_details(place_id, details),
            Ok(resp) => {
                warn!(
                    "Failed to get Place Details for {}. Status: {}. Error: {}. Using basic info.",
                    place_id,
                    resp.status,
                    resp.error_message.unwrap_or_default()
                );
                self.metrics.record_detail_failure();
                EnrichedPlace::from_search_result(place_id, raw)
            }
            Err(e) => {
                warn!(
                    "Failed to get Place Details for {}. Error: {}. Using basic info.",
                    place_id, e
                );
                self.metrics.record_detail_failure();
                EnrichedPlace::from_search_result(place_id, raw)
            }
        }
    }
}
