//! Google Places web service client

use super::models::{DetailsResponse, TextSearchPage, DETAIL_FIELDS};
use super::traits::PlacesApi;
use crate::config::PlacesSettings;
use crate::error::PlacesError;
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Google Places API (legacy web service) backend
pub struct GooglePlaces {
    client: HttpClient,
    api_key: String,
    text_search_url: String,
    details_url: String,
    fields: String,
}

impl GooglePlaces {
    pub fn new(client: HttpClient, api_key: impl Into<String>, settings: &PlacesSettings) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            text_search_url: settings.text_search_url.clone(),
            details_url: settings.details_url.clone(),
            fields: DETAIL_FIELDS.join(","),
        }
    }
}

#[async_trait]
impl PlacesApi for GooglePlaces {
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<TextSearchPage, PlacesError> {
        let mut params = vec![("query", query), ("key", self.api_key.as_str())];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let page: TextSearchPage = self.client.get_json(&self.text_search_url, &params).await?;
        debug!(
            "Text Search status {} with {} results",
            page.status,
            page.results.len()
        );
        Ok(page)
    }

    async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, PlacesError> {
        let params = [
            ("place_id", place_id),
            ("fields", self.fields.as_str()),
            ("key", self.api_key.as_str()),
        ];
        self.client.get_json(&self.details_url, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::ApiStatus;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> GooglePlaces {
        let settings = PlacesSettings {
            text_search_url: format!("{}/textsearch/json", server.uri()),
            details_url: format!("{}/details/json", server.uri()),
            ..Default::default()
        };
        GooglePlaces::new(HttpClient::new().unwrap(), "test-key", &settings)
    }

    #[tokio::test]
    async fn test_text_search_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/textsearch/json"))
            .and(query_param("query", "dentists in denver"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [{ "place_id": "p1", "name": "Smile Co" }],
                "next_page_token": "next"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = backend(&server)
            .text_search("dentists in denver", None)
            .await
            .unwrap();

        assert_eq!(page.status, ApiStatus::Ok);
        assert_eq!(page.results[0].name.as_deref(), Some("Smile Co"));
        assert_eq!(page.next_page_token.as_deref(), Some("next"));
    }

    #[tokio::test]
    async fn test_text_search_sends_page_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/textsearch/json"))
            .and(query_param("pagetoken", "tok-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ZERO_RESULTS",
                "results": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = backend(&server)
            .text_search("dentists", Some("tok-2"))
            .await
            .unwrap();

        assert_eq!(page.status, ApiStatus::ZeroResults);
    }

    #[tokio::test]
    async fn test_place_details_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/details/json"))
            .and(query_param("place_id", "p1"))
            .and(query_param("fields", DETAIL_FIELDS.join(",").as_str()))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": {
                    "place_id": "p1",
                    "name": "Smile Co",
                    "website": "https://smile.example.com",
                    "url": "https://maps.google.com/?cid=1"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = backend(&server).place_details("p1").await.unwrap();
        let details = resp.result.unwrap();

        assert!(resp.status.is_ok());
        assert_eq!(details.website.as_deref(), Some("https://smile.example.com"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let settings = PlacesSettings {
            text_search_url: "http://127.0.0.1:1/textsearch/json".to_string(),
            ..Default::default()
        };
        let places = GooglePlaces::new(HttpClient::new().unwrap(), "k", &settings);

        let err = places.text_search("anything", None).await.unwrap_err();
        assert!(matches!(err, PlacesError::Transport(_)));
    }
}
