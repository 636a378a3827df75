//! Integration tests for the product listing API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied and demo data
//!   seeded (cargo run -p copperleaf-cli -- seed)
//! - The storefront server running (cargo run -p copperleaf-storefront)
//!
//! Run with: cargo test -p copperleaf-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::Value;

use copperleaf_core::Price;
use copperleaf_integration_tests::{base_url, client};

async fn fetch_products(query: &str) -> (StatusCode, Vec<Value>) {
    let resp = client()
        .get(format!("{}/api/products{query}", base_url()))
        .send()
        .await
        .expect("Failed to list products");

    let status = resp.status();
    let body: Vec<Value> = resp.json().await.expect("Response is not a JSON array");
    (status, body)
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_default_listing() {
    let (status, docs) = fetch_products("").await;

    assert_eq!(status, StatusCode::OK);
    // Default page size is 100 documents starting at offset 0.
    assert!(docs.len() <= 100);
    assert!(!docs.is_empty(), "Seeded database should have products");
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_oversized_limit_is_clamped() {
    let (status, docs) = fetch_products("?limit=10000").await;

    assert_eq!(status, StatusCode::OK);
    assert!(docs.len() <= 500);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_non_numeric_limit_falls_back() {
    let (status, docs) = fetch_products("?limit=plenty").await;

    // The request still succeeds with the default page size.
    assert_eq!(status, StatusCode::OK);
    assert!(docs.len() <= 100);
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_filter_by_store() {
    let (status, docs) = fetch_products("?storeId=copperleaf-north").await;

    assert_eq!(status, StatusCode::OK);
    for doc in &docs {
        assert_eq!(doc["storeId"], "copperleaf-north");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_store_takes_precedence_over_category() {
    // The seeded data has no "candles" under this store except its own.
    let (status, docs) = fetch_products("?storeId=copperleaf-north&category=ceramics").await;

    assert_eq!(status, StatusCode::OK);
    for doc in &docs {
        assert_eq!(doc["storeId"], "copperleaf-north");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_filter_by_category() {
    let (status, docs) = fetch_products("?category=homeware").await;

    assert_eq!(status, StatusCode::OK);
    for doc in &docs {
        assert_eq!(doc["category"], "homeware");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_skip_pages_through_results() {
    let (_, first) = fetch_products("?limit=1").await;
    let (_, second) = fetch_products("?limit=1&skip=1").await;

    if !first.is_empty() && !second.is_empty() {
        assert_ne!(first, second, "Offset should move the window");
    }
}

#[tokio::test]
#[ignore = "Requires running storefront server and seeded database"]
async fn test_documents_carry_well_formed_prices() {
    let (_, docs) = fetch_products("?category=candles").await;

    for doc in &docs {
        if doc.get("price").is_some() {
            let price: Price = serde_json::from_value(doc["price"].clone())
                .expect("Seeded price documents deserialize");
            assert!(!price.display().is_empty());
        }
    }
}
