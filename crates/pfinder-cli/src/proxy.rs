//! HTTP client for the pfinder search proxy.

use std::time::Duration;

use pfinder_core::{FailureKind, SearchQuery};
use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The proxy answered with a non-2xx status and, usually, an
    /// `{"error": "..."}` body.
    #[error("proxy returned HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("JSON deserialization error from proxy: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl ProxyClientError {
    /// Collapses the error into the presenter's failure taxonomy.
    #[must_use]
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            ProxyClientError::Rejected { status: 400, .. } => FailureKind::BadRequest,
            _ => FailureKind::Upstream,
        }
    }
}

pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    /// # Errors
    ///
    /// Returns [`ProxyClientError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ProxyClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pfinder-cli/0.1")
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Calls `GET /api/search` and returns the raw provider payload.
    ///
    /// # Errors
    ///
    /// - [`ProxyClientError::Http`] on network failure.
    /// - [`ProxyClientError::Rejected`] on a non-2xx status.
    /// - [`ProxyClientError::Deserialize`] if the body is not JSON.
    pub async fn search(&self, query: &SearchQuery) -> Result<serde_json::Value, ProxyClientError> {
        let url = format!("{}/api/search?query={}", self.base_url, query.encoded());
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
                .unwrap_or_else(|| "unexpected response".to_owned());
            return Err(ProxyClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(ProxyClientError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn query(s: &str) -> SearchQuery {
        SearchQuery::parse(s).expect("valid query")
    }

    #[tokio::test]
    async fn search_returns_payload() {
        let server = MockServer::start().await;
        let body = json!({ "search_results": [ { "asin": "B0001" } ] });
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("query", "cast iron"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let client = ProxyClient::new(&format!("{}/", server.uri()), 5).expect("client");
        let payload = client.search(&query("cast iron")).await.expect("payload");
        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn search_maps_400_to_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Missing query param" })),
            )
            .mount(&server)
            .await;

        let client = ProxyClient::new(&server.uri(), 5).expect("client");
        let err = client.search(&query("mug")).await.unwrap_err();
        assert!(
            matches!(err, ProxyClientError::Rejected { status: 400, ref message } if message == "Missing query param"),
            "got {err:?}"
        );
        assert_eq!(err.failure_kind(), FailureKind::BadRequest);
    }

    #[tokio::test]
    async fn search_maps_500_to_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({ "error": "Failed to fetch from Rainforest API" })),
            )
            .mount(&server)
            .await;

        let client = ProxyClient::new(&server.uri(), 5).expect("client");
        let err = client.search(&query("mug")).await.unwrap_err();
        assert_eq!(err.failure_kind(), FailureKind::Upstream);
    }

    #[tokio::test]
    async fn search_non_json_success_is_deserialize_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
            .mount(&server)
            .await;

        let client = ProxyClient::new(&server.uri(), 5).expect("client");
        let err = client.search(&query("mug")).await.unwrap_err();
        assert!(matches!(err, ProxyClientError::Deserialize(_)));
        assert_eq!(err.failure_kind(), FailureKind::Upstream);
    }
}
