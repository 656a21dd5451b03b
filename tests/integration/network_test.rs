//! Real HTTP path of `NetworkClient`
//!
//! Status mapping, body decoding and headers, against wiremock.

use std::sync::Arc;
use std::time::Duration;

use benevits::egui_app::{Endpoint, MemorySessionStore, NetworkClient, NetworkService, SessionStore};
use benevits::shared::auth::EmptyResponse;
use benevits::shared::benevit::{BenevitsResponse, SearchResponse};
use benevits::shared::error::NetworkError;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{coffee_and_pizza, server_config, TEST_TOKEN};

const LANDING: &str = "/api/v1/member/landing_benevits";
const SEARCH: &str = "/api/v1/member/member_benevits/search";
const LOGIN: &str = "/api/v2/member/authentication";

fn client_for(server: &MockServer, session: Arc<dyn SessionStore>) -> NetworkClient {
    NetworkClient::new(server_config(&server.uri(), Duration::from_secs(5)), session).unwrap()
}

fn logged_in() -> Arc<dyn SessionStore> {
    Arc::new(MemorySessionStore::with_token(TEST_TOKEN))
}

#[tokio::test]
async fn test_landing_decodes_and_sends_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LANDING))
        .and(header("authorization", "Bearer test-token-12345"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(coffee_and_pizza()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in());
    let response: BenevitsResponse = client.request(Endpoint::LandingBenevits).await.unwrap();

    assert_eq!(response, coffee_and_pizza());
}

#[tokio::test]
async fn test_no_bearer_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LANDING))
        .respond_with(ResponseTemplate::new(200).set_body_json(coffee_and_pizza()))
        .mount(&server)
        .await;

    let client = client_for(&server, Arc::new(MemorySessionStore::new()));
    let _: BenevitsResponse = client.request(Endpoint::LandingBenevits).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_search_posts_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEARCH))
        .and(body_json(serde_json::json!({ "query": "xbox" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "benevits": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in());
    let response: SearchResponse = client.request(Endpoint::search("xbox")).await.unwrap();

    assert!(response.benevits.is_empty());
}

#[tokio::test]
async fn test_login_returns_headers_without_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_json(serde_json::json!({ "credentials": "encrypted-blob" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("authorization", "Bearer server-jwt")
                .set_body_json(serde_json::json!({ "success": true })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in());
    let (body, headers): (EmptyResponse, _) = client
        .request_with_headers(Endpoint::login("encrypted-blob", "61917612998", "Contrasena01"))
        .await
        .unwrap();

    assert_eq!(body.success, Some(true));
    assert_eq!(headers.get("authorization").unwrap(), "Bearer server-jwt");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_status_mapping() {
    let cases = [
        (401, NetworkError::Unauthorized),
        (403, NetworkError::ServerError(403)),
        (404, NetworkError::ServerError(404)),
        (500, NetworkError::ServerError(500)),
        (503, NetworkError::ServerError(503)),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(path(LANDING))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = client_for(&server, logged_in());
        let result: Result<BenevitsResponse, _> = client.request(Endpoint::LandingBenevits).await;
        assert_eq!(result.unwrap_err(), expected, "status {}", status);
    }
}

#[tokio::test]
async fn test_malformed_body_is_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(path(LANDING))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, logged_in());
    let result: Result<BenevitsResponse, _> = client.request(Endpoint::LandingBenevits).await;
    assert_eq!(result.unwrap_err(), NetworkError::DecodingError);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(path(LANDING))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(coffee_and_pizza())
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;

    let client = NetworkClient::new(server_config(&server.uri(), Duration::from_millis(100)), logged_in()).unwrap();
    let result: Result<BenevitsResponse, _> = client.request(Endpoint::LandingBenevits).await;
    assert_eq!(result.unwrap_err(), NetworkError::Timeout);
}
