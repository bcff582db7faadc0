use thiserror::Error;
use tracing::info;
use crate::models::venue::{GourmetSearchResponse, Venue};

// Fixed HotPepper search parameters: band 2 of the provider's radius scale,
// lite response shape, at most 5 records.
const SEARCH_RANGE_BAND: &str = "2";
const RESPONSE_TYPE: &str = "lite";
const RESPONSE_FORMAT: &str = "json";
const RESULT_LIMIT: &str = "5";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("upstream request failed: {0}")]
    Request(reqwest::Error),
    /// Non-success status from the provider; the upstream code is kept so
    /// the caller can echo it.
    #[error("Error: {0}")]
    UpstreamStatus(u16),
    #[error("malformed search payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        // the request URL carries the API key in its query string
        SearchError::Request(e.without_url())
    }
}

pub struct HotPepperRepo {
    http_client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl HotPepperRepo {
    pub fn new(
        http_client: reqwest::Client,
        api_key: String,
        api_url: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }

    /// Single search round trip: genre and keyword are forwarded to the
    /// provider verbatim, the response is reshaped into [`Venue`] records.
    /// Never retried; a non-success status is handed straight back.
    pub async fn search_venues(
        &self,
        genre: &str,
        keyword: &str,
    ) -> Result<Vec<Venue>, SearchError> {
        let response = self.http_client
            .get(&self.api_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("keyword", keyword),
                ("genre", genre),
                ("range", SEARCH_RANGE_BAND),
                ("type", RESPONSE_TYPE),
                ("format", RESPONSE_FORMAT),
                ("count", RESULT_LIMIT),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::UpstreamStatus(response.status().as_u16()));
        }

        let payload: GourmetSearchResponse = serde_json::from_str(&response.text().await?)?;
        let venues: Vec<Venue> = payload
            .results
            .shop
            .into_iter()
            .map(Venue::from)
            .collect();
        info!("Shaped {} venue records: {:?}", venues.len(), venues);

        Ok(venues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    const FAKE_API_KEY: &str = "fake-api-key";

    fn repo_for(server: &MockServer) -> HotPepperRepo {
        HotPepperRepo::new(
            reqwest::Client::new(),
            FAKE_API_KEY.to_string(),
            server.url("/"),
        )
    }

    fn two_shop_payload() -> Value {
        json!({
            "results": {
                "shop": [
                    {
                        "name": "Trattoria Uno",
                        "lat": 35.6595,
                        "lng": 139.7005,
                        "photo": { "pc": { "m": "http://img.example/uno_m.jpg" } }
                    },
                    {
                        "name": "Osteria Due",
                        "lat": "35.6581",
                        "lng": "139.7017",
                        "photo": { "pc": { "m": "http://img.example/due_m.jpg" } }
                    }
                ]
            }
        })
    }

    #[tokio::test]
    async fn search_shapes_every_shop_into_a_venue() {
        let server = MockServer::start_async().await;
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/")
                    .query_param("key", FAKE_API_KEY)
                    .query_param("keyword", "pasta")
                    .query_param("genre", "italian")
                    .query_param("range", "2")
                    .query_param("type", "lite")
                    .query_param("format", "json")
                    .query_param("count", "5");
                then.status(200).json_body(two_shop_payload());
            })
            .await;

        let venues = repo_for(&server)
            .search_venues("italian", "pasta")
            .await
            .unwrap();

        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].name, "Trattoria Uno");
        assert_eq!(venues[0].lat, 35.6595);
        assert_eq!(venues[0].lng, 139.7005);
        assert_eq!(venues[0].photo_url, "http://img.example/uno_m.jpg");
        assert_eq!(venues[1].name, "Osteria Due");
        assert_eq!(venues[1].lat, 35.6581);
        assert_eq!(venues[1].photo_url, "http://img.example/due_m.jpg");
        search_mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_surfaces_upstream_status() {
        let server = MockServer::start_async().await;
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(503);
            })
            .await;

        let err = repo_for(&server)
            .search_venues("izakaya", "")
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::UpstreamStatus(503)));
        assert_eq!(err.to_string(), "Error: 503");
        search_mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_rejects_payload_missing_required_fields() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).json_body(json!({ "results": {} }));
            })
            .await;

        let err = repo_for(&server)
            .search_venues("cafe", "")
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn search_surfaces_transport_failure() {
        let repo = HotPepperRepo::new(
            reqwest::Client::new(),
            FAKE_API_KEY.to_string(),
            "http://test.invalid".to_string(),
        );

        let err = repo.search_venues("cafe", "").await.unwrap_err();

        assert!(matches!(err, SearchError::Request(_)));
    }

    #[tokio::test]
    async fn repeated_search_yields_identical_output() {
        let server = MockServer::start_async().await;
        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).json_body(two_shop_payload());
            })
            .await;

        let repo = repo_for(&server);
        let first = repo.search_venues("italian", "pasta").await.unwrap();
        let second = repo.search_venues("italian", "pasta").await.unwrap();

        assert_eq!(json!(first), json!(second));
        search_mock.assert_hits_async(2).await;
    }
}
