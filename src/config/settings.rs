//! Settings structures for lead-relay configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub places: PlacesSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge values from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("LEAD_RELAY_DEBUG") {
            self.general.debug = parse_flag(&val);
        }
        if let Some(val) = lookup("LEAD_RELAY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("LEAD_RELAY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = lookup("GOOGLE_PLACES_API_KEY") {
            let val = val.trim().to_string();
            self.places.api_key = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Reject settings the relay cannot run with
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.places.text_search_url)?;
        Url::parse(&self.places.details_url)?;
        if self.places.max_pages == 0 {
            bail!("places.max_pages must be at least 1");
        }
        let timeout = self.outgoing.request_timeout;
        if !(timeout.is_finite() && timeout > 0.0) {
            bail!("outgoing.request_timeout must be a positive number of seconds");
        }
        Ok(())
    }
}

fn parse_flag(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Name reported by the liveness route
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "LeadDawg".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5001,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Max idle connections kept per host
    pub pool_maxsize: usize,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Google Places upstream settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacesSettings {
    /// API key; normally supplied through GOOGLE_PLACES_API_KEY
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Text search endpoint
    pub text_search_url: String,
    /// Place details endpoint
    pub details_url: String,
    /// Maximum number of text search pages fetched per query
    pub max_pages: u32,
    /// Wait before a next_page_token becomes valid upstream
    pub page_token_delay_ms: u64,
}

impl Default for PlacesSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            text_search_url: "https://maps.googleapis.com/maps/api/place/textsearch/json"
                .to_string(),
            details_url: "https://maps.googleapis.com/maps/api/place/details/json".to_string(),
            max_pages: 3,
            page_token_delay_ms: 2000,
        }
    }
}

impl PlacesSettings {
    /// Delay applied before every page fetched with a token
    pub fn page_token_delay(&self) -> Duration {
        Duration::from_millis(self.page_token_delay_ms)
    }

    /// First few characters of the key, for logs
    pub fn api_key_hint(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(|key| format!("{}...", key.chars().take(5).collect::<String>()))
    }
}
