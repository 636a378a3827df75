//! Integration tests for the page-intro admin API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storefront server running (cargo run -p copperleaf-storefront)
//!
//! Run with: cargo test -p copperleaf-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use copperleaf_integration_tests::{base_url, client};

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_get_returns_json_object() {
    let resp = client()
        .get(format!("{}/api/admin/pageintro", base_url()))
        .send()
        .await
        .expect("Failed to get page intro");

    assert_eq!(resp.status(), StatusCode::OK);

    // Either the stored document or {} - always a JSON value.
    let body: Value = resp.json().await.expect("Response is not JSON");
    assert!(body.is_object());
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_save_roundtrip() {
    let doc = json!({
        "eyebrow": "Integration test",
        "title": "Roundtrip banner",
        "buttonUrl": "/products",
    });

    let resp = client()
        .post(format!("{}/api/admin/pageintro", base_url()))
        .json(&doc)
        .send()
        .await
        .expect("Failed to save page intro");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Response is not JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["provider"], "postgres");

    // The document comes back wholesale on the next read.
    let resp = client()
        .get(format!("{}/api/admin/pageintro", base_url()))
        .send()
        .await
        .expect("Failed to re-read page intro");

    let stored: Value = resp.json().await.expect("Response is not JSON");
    assert_eq!(stored, doc);
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_malformed_body_is_rejected() {
    let resp = client()
        .post(format!("{}/api/admin/pageintro", base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to post malformed body");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Error response is not JSON");
    assert!(body["error"].is_string());
}

#[tokio::test]
#[ignore = "Requires running storefront server and database"]
async fn test_empty_body_is_rejected() {
    let resp = client()
        .post(format!("{}/api/admin/pageintro", base_url()))
        .send()
        .await
        .expect("Failed to post empty body");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
