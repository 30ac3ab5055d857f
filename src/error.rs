//! Error types surfaced by the relay

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure talking to a Places endpoint
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors returned to HTTP callers
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("API key not configured. Check .env file.")]
    Configuration,

    #[error("{0}")]
    Validation(String),

    #[error("Google Places API (Text Search) error: {status} - {message}")]
    Upstream { status: String, message: String },

    #[error("Error calling Google Places API: {0}")]
    Network(#[from] PlacesError),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Configuration | RelayError::Upstream { .. } | RelayError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
