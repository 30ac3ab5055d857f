//! HTTP networking module
//!
//! Provides the outbound HTTP client used for the Places endpoints.

mod client;

pub use client::HttpClient;
