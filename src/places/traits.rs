//! Upstream places API abstraction

use super::models::{DetailsResponse, TextSearchPage};
use crate::error::PlacesError;
use async_trait::async_trait;

/// The two upstream operations the relay depends on
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Fetch one page of text search results, optionally continuing from a
    /// pagination token
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchPage, PlacesError>;

    /// Look up the detail fields of a single place
    async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, PlacesError>;
}
