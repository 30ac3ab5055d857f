//! Wire types for the Places text search and details endpoints

use serde::Deserialize;
use std::fmt;

/// Fields requested from the details endpoint
pub const DETAIL_FIELDS: &[&str] = &[
    "name",
    "formatted_address",
    "website",
    "formatted_phone_number",
    "types",
    "rating",
    "user_ratings_total",
    "business_status",
    "opening_hours",
    "url",
    "place_id",
];

/// Top-level `status` of a Places response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    UnknownError,
    Other(String),
}

impl ApiStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApiStatus::Ok => "OK",
            ApiStatus::ZeroResults => "ZERO_RESULTS",
            ApiStatus::OverQueryLimit => "OVER_QUERY_LIMIT",
            ApiStatus::RequestDenied => "REQUEST_DENIED",
            ApiStatus::InvalidRequest => "INVALID_REQUEST",
            ApiStatus::NotFound => "NOT_FOUND",
            ApiStatus::UnknownError => "UNKNOWN_ERROR",
            ApiStatus::Other(s) => s,
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == ApiStatus::Ok
    }
}

impl From<String> for ApiStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OK" => ApiStatus::Ok,
            "ZERO_RESULTS" => ApiStatus::ZeroResults,
            "OVER_QUERY_LIMIT" => ApiStatus::OverQueryLimit,
            "REQUEST_DENIED" => ApiStatus::RequestDenied,
            "INVALID_REQUEST" => ApiStatus::InvalidRequest,
            "NOT_FOUND" => ApiStatus::NotFound,
            "UNKNOWN_ERROR" => ApiStatus::UnknownError,
            _ => ApiStatus::Other(s),
        }
    }
}

impl From<Option<String>> for ApiStatus {
    fn from(s: Option<String>) -> Self {
        s.map(ApiStatus::from).unwrap_or_default()
    }
}

// A missing or null status is treated as an unnamed failure.
impl Default for ApiStatus {
    fn default() -> Self {
        ApiStatus::Other("None".to_string())
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One text search result
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPlace {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub types: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub business_status: Option<String>,
}

/// One page of text search results
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextSearchPage {
    pub status: ApiStatus,
    pub results: Vec<RawPlace>,
    pub next_page_token: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub weekday_text: Option<Vec<String>>,
}

/// Result object of a details lookup
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaceDetails {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub types: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub business_status: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub url: Option<String>,
}

/// Full details response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailsResponse {
    pub status: ApiStatus,
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}
