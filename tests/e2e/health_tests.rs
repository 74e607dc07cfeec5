/// E2E tests for the health endpoint

use crate::e2e::TestServer;
use reqwest::Client;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Insurance Quote API is running");

    server.abort();
}

#[tokio::test]
async fn test_unknown_endpoint_404() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .get(format!("{}/unknown-endpoint", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Route not found");

    server.abort();
}
