/// E2E tests for the quote endpoint

use crate::e2e::TestServer;
use reqwest::Client;
use serde_json::{json, Value};

#[tokio::test]
async fn test_quote_adult_car_driver() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "car", "driverAge": 35}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["vehicleType"], "car");
    assert_eq!(body["driverAge"], json!(35));
    assert_eq!(body["ageCategory"], "adult");
    assert_eq!(body["basePremium"], json!(1200));
    assert_eq!(body["ageMultiplier"].as_f64().unwrap(), 1.0);
    assert_eq!(body["finalPremium"].as_f64().unwrap(), 1080.0);
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["status"], "premium");
    assert_eq!(body["message"], "Standard premium calculated successfully");

    server.abort();
}

#[tokio::test]
async fn test_quote_young_motorcycle_rider() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "motorcycle", "driverAge": 20}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ageCategory"], "young");
    assert_eq!(body["finalPremium"].as_f64().unwrap(), 2160.0);
    assert_eq!(body["status"], "premium");

    server.abort();
}

#[tokio::test]
async fn test_quote_high_risk_young_truck_driver() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "truck", "driverAge": 18}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "peasant");
    assert!(body["finalPremium"].as_f64().unwrap() > 2500.0);
    assert_eq!(
        body["message"],
        "High-risk profile - premium exceeds standard rates"
    );

    server.abort();
}

#[tokio::test]
async fn test_quote_vehicle_spelling_echoed() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "SUV", "driverAge": 40}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["vehicleType"], "SUV");
    assert_eq!(body["basePremium"], json!(1500));

    server.abort();
}

#[tokio::test]
async fn test_quote_unsupported_vehicle_type() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "spaceship", "driverAge": 30}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid input");
    assert_eq!(
        body["message"],
        "Unsupported vehicle type. Supported types: car, truck, motorcycle, suv, van"
    );

    server.abort();
}

#[tokio::test]
async fn test_quote_missing_driver_age() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "car"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid input");
    assert_eq!(
        body["message"],
        "Driver age is required and must be between 16 and 100"
    );

    server.abort();
}

#[tokio::test]
async fn test_quote_zero_age_rejected() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .json(&json!({"vehicleType": "car", "driverAge": 0}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid input");

    server.abort();
}

#[tokio::test]
async fn test_quote_out_of_range_age() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    for age in [15, 101] {
        let resp = client
            .post(format!("{}/quote", server.base_url))
            .json(&json!({"vehicleType": "car", "driverAge": age}))
            .send()
            .await
            .unwrap();

        assert_eq!(
            resp.status(),
            reqwest::StatusCode::BAD_REQUEST,
            "age {} must be rejected",
            age
        );
    }

    server.abort();
}

#[tokio::test]
async fn test_quote_malformed_json() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .post(format!("{}/quote", server.base_url))
        .body("{ invalid json")
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();

    // Unreadable bodies surface as the terminal error response
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");

    server.abort();
}

#[tokio::test]
async fn test_quote_wrong_http_method() {
    let server = TestServer::spawn().await.expect("Failed to start test server");
    let client = Client::new();

    let resp = client
        .get(format!("{}/quote", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    server.abort();
}
