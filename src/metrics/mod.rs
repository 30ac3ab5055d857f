//! Metrics collection module
//!
//! Tracks search volume and upstream degradation for the /stats route.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide relay counters
#[derive(Debug, Default)]
pub struct Metrics {
    searches: AtomicU64,
    text_search_pages: AtomicU64,
    detail_lookups: AtomicU64,
    detail_failures: AtomicU64,
    partial_results: AtomicU64,
    upstream_errors: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub text_search_pages: u64,
    pub detail_lookups: u64,
    pub detail_failures: u64,
    pub partial_results: u64,
    pub upstream_errors: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a text search page that came back from upstream
    pub fn record_page(&self) {
        self.text_search_pages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detail_lookup(&self) {
        self.detail_lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a details lookup that fell back to text search fields
    pub fn record_detail_failure(&self) {
        self.detail_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a search that stopped paginating early but still returned results
    pub fn record_partial(&self) {
        self.partial_results.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_error(&self) {
        self.upstream_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            text_search_pages: self.text_search_pages.load(Ordering::Relaxed),
            detail_lookups: self.detail_lookups.load(Ordering::Relaxed),
            detail_failures: self.detail_failures.load(Ordering::Relaxed),
            partial_results: self.partial_results.load(Ordering::Relaxed),
            upstream_errors: self.upstream_errors.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics() {
        let metrics = Metrics::new();
        metrics.inc_search();
        metrics.record_page();
        metrics.record_page();
        metrics.record_detail_lookup();
        metrics.record_detail_failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.searches, 1);
        assert_eq!(snapshot.text_search_pages, 2);
        assert_eq!(snapshot.detail_lookups, 1);
        assert_eq!(snapshot.detail_failures, 1);
        assert_eq!(snapshot.partial_results, 0);
        assert_eq!(snapshot.upstream_errors, 0);
    }
}
