//! Search request and response models

use crate::places::{PlaceDetails, RawPlace};
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder for text fields the upstream did not supply
pub const NOT_AVAILABLE: &str = "N/A";

/// Business status used when upstream does not report one
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

/// Body of `POST /search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
}

/// Outcome status of a successful search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchStatus {
    Ok,
    ZeroResults,
}

/// Body of a successful search response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub status: SearchStatus,
    pub places: Vec<EnrichedPlace>,
}

impl SearchResponse {
    pub fn ok(places: Vec<EnrichedPlace>) -> Self {
        Self {
            status: SearchStatus::Ok,
            places,
        }
    }

    pub fn zero_results() -> Self {
        Self {
            status: SearchStatus::ZeroResults,
            places: Vec::new(),
        }
    }
}

/// A value that is either known or serialized as `"N/A"`
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Known(T),
    NotAvailable,
}

impl<T> Field<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, Field::Known(_))
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::NotAvailable, Field::Known)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Known(value) => value.serialize(serializer),
            Field::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Output record, one per text search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub name: String,
    pub address: String,
    pub website: Field<String>,
    pub phone_number: Field<String>,
    /// Places does not expose email addresses; always `"N/A"`.
    pub email: Field<String>,
    pub types: Vec<String>,
    pub rating: Field<f64>,
    pub user_ratings_total: u64,
    pub business_status: String,
    pub opening_hours: Field<Vec<String>>,
    pub google_maps_url: Field<String>,
}

impl EnrichedPlace {
    /// Record for a text search result that carried no place id
    pub fn missing_id(raw: RawPlace) -> Self {
        Self {
            place_id: None,
            name: raw
                .name
                .unwrap_or_else(|| format!("{NOT_AVAILABLE} (Missing ID)")),
            address: raw
                .formatted_address
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            website: Field::NotAvailable,
            phone_number: Field::NotAvailable,
            email: Field::NotAvailable,
            types: raw.types.unwrap_or_default(),
            rating: Field::NotAvailable,
            user_ratings_total: 0,
            business_status: UNKNOWN_STATUS.to_string(),
            opening_hours: Field::NotAvailable,
            google_maps_url: Field::NotAvailable,
        }
    }

    /// Record built from a successful details lookup. Missing fields take
    /// fixed defaults, never the text search values.
    pub fn from_details(place_id: String, details: PlaceDetails) -> Self {
        Self {
            place_id: Some(place_id),
            name: details.name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            address: details
                .formatted_address
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            website: details.website.into(),
            phone_number: details.formatted_phone_number.into(),
            email: Field::NotAvailable,
            types: details.types.unwrap_or_default(),
            rating: details.rating.into(),
            user_ratings_total: details.user_ratings_total.unwrap_or(0),
            business_status: details
                .business_status
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            opening_hours: details.opening_hours.and_then(|h| h.weekday_text).into(),
            google_maps_url: details.url.into(),
        }
    }

    /// Record built from the text search entry when its details lookup failed
    pub fn from_search_result(place_id: String, raw: RawPlace) -> Self {
        Self {
            place_id: Some(place_id),
            name: raw
                .name
                .unwrap_or_else(|| format!("{NOT_AVAILABLE} (Details Failed)")),
            address: raw
                .formatted_address
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            website: Field::NotAvailable,
            phone_number: Field::NotAvailable,
            email: Field::NotAvailable,
            types: raw.types.unwrap_or_default(),
            rating: raw.rating.into(),
            user_ratings_total: raw.user_ratings_total.unwrap_or(0),
            business_status: raw
                .business_status
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            opening_hours: Field::NotAvailable,
            google_maps_url: Field::NotAvailable,
        }
    }
}
