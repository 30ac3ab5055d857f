//! HTTP client for calling the Places endpoints

use crate::config::OutgoingSettings;
use crate::error::PlacesError;
use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with relay-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::from_secs_f64(settings.request_timeout);
        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(format!("lead-relay/{}", crate::VERSION))
            .gzip(true)
            .brotli(true);

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        Ok(Self {
            client: builder.build()?,
            timeout,
        })
    }

    /// Configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` with query parameters and decode the JSON body.
    ///
    /// Transport errors are stripped of their URL since the query string
    /// carries the API key.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| PlacesError::Transport(e.without_url()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(PlacesError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PlacesError::Transport(e.without_url()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}
