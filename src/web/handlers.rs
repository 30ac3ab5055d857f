//! HTTP request handlers

use super::state::AppState;
use crate::error::RelayError;
use crate::search::{SearchRequest, SearchResponse};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::any::Any;
use tracing::{error, warn};

/// Liveness handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("{} Backend is running!", state.instance_name()),
    )
}

/// Search handler
pub async fn search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, RelayError> {
    // The key check comes first so a misconfigured instance reports that
    // regardless of the request body.
    let Some(relay) = state.search.as_ref() else {
        error!("API key not configured");
        return Err(RelayError::Configuration);
    };

    let query = match body {
        Ok(Json(SearchRequest { query: Some(q) })) if !q.trim().is_empty() => q,
        Ok(_) => {
            warn!("Missing 'query' in request body");
            return Err(RelayError::Validation(
                "Missing 'query' in request body".to_string(),
            ));
        }
        Err(rejection) => {
            warn!("Rejected search body: {}", rejection.body_text());
            return Err(RelayError::Validation(format!(
                "Invalid request body: {}",
                rejection.body_text()
            )));
        }
    };

    let response = relay.search(&query).await?;
    Ok(Json(response))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "search_available": state.search_available(),
    }))
}

/// Stats handler
pub async fn stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.snapshot())
}

/// Turn a panic inside a handler into the generic 500 response
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Unhandled error while serving request: {}", detail);
    RelayError::Unexpected(detail).into_response()
}
