//! Integration tests for `RainforestClient` using wiremock HTTP mocks.

use pfinder_core::SearchQuery;
use pfinder_rainforest::{RainforestClient, RainforestError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> RainforestClient {
    RainforestClient::with_base_url("test-key", 5, &format!("{}/request", server.uri()))
        .expect("client construction should not fail")
}

fn query(s: &str) -> SearchQuery {
    SearchQuery::parse(s).expect("valid query")
}

#[tokio::test]
async fn search_sends_fixed_parameters_and_returns_body_verbatim() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "request_info": { "success": true, "credits_used": 1 },
        "search_results": [
            { "asin": "B07XJ8C8F5", "title": "Digital Kitchen Scale", "unexpected": [1, 2, 3] }
        ],
        "pagination": { "current_page": 1 }
    });

    Mock::given(method("GET"))
        .and(path("/request"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("type", "search"))
        .and(query_param("amazon_domain", "amazon.com"))
        .and(query_param("search_term", "kitchen scale"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let payload = client
        .search(&query("kitchen scale"))
        .await
        .expect("search should succeed");

    let parsed: serde_json::Value = serde_json::from_str(&payload).expect("json payload");
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn search_returns_body_text_unchanged() {
    let server = MockServer::start().await;
    let raw = r#"{"search_results":[{"title":"T","asin":"B1"}],"pagination":{"z":1, "a":2}}"#;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let payload = client.search(&query("kitchen")).await.expect("search");
    assert_eq!(payload, raw);
}

#[tokio::test]
async fn search_issues_exactly_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.search(&query("mug")).await.expect("search");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let raw_query = received[0].url.query().unwrap_or_default();
    assert!(raw_query.contains("search_term=mug"), "{raw_query}");
}

#[tokio::test]
async fn search_non_success_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "invalid api_key" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search(&query("mug")).await.unwrap_err();
    assert!(
        matches!(err, RainforestError::UnexpectedStatus { status: 401 }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn search_invalid_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search(&query("mug")).await.unwrap_err();
    assert!(matches!(err, RainforestError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn search_connection_failure_does_not_leak_api_key() {
    // Nothing listens on a port freed right after binding.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("bind ephemeral port")
        .port();
    let uri = format!("http://127.0.0.1:{port}/request");

    let client = RainforestClient::with_base_url("super-secret-key", 2, &uri).expect("client");
    let err = client.search(&query("mug")).await.unwrap_err();

    assert!(matches!(err, RainforestError::Http(_)), "got {err:?}");
    assert!(
        !err.to_string().contains("super-secret-key"),
        "error leaked credential: {err}"
    );
}
