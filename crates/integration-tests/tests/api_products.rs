//! Integration tests for the product catalog endpoints.

use serde_json::{Value, json};

use krishibazaar_integration_tests::{TestApp, spawn_app};

async fn list(app: &TestApp, query: &str) -> Vec<Value> {
    let resp = app
        .client
        .get(app.url(&format!("/products{query}")))
        .send()
        .await
        .expect("Failed to list products");
    assert_eq!(resp.status(), 200);
    resp.json().await.expect("Failed to parse body")
}

fn ids(products: &[Value]) -> Vec<&str> {
    products
        .iter()
        .map(|p| p["id"].as_str().expect("product id is a string"))
        .collect()
}

// ============================================================================
// Listing & Filters
// ============================================================================

#[tokio::test]
async fn test_seeded_listing_is_promoted_first() {
    let app = spawn_app().await;

    let products = list(&app, "").await;
    assert_eq!(ids(&products), ["p2", "p1", "p3"]);

    // field names and the numeric price come straight off the wire
    assert_eq!(products[0]["type"], "herbicide");
    assert_eq!(products[0]["merchantId"], "m2");
    assert_eq!(products[0]["price"], 1200.0);
    assert_eq!(products[0]["promoted"], true);
}

#[tokio::test]
async fn test_type_filter() {
    let app = spawn_app().await;

    let products = list(&app, "?type=fertilizer").await;
    assert_eq!(ids(&products), ["p1"]);
}

#[tokio::test]
async fn test_search_filter_is_case_insensitive() {
    let app = spawn_app().await;

    let products = list(&app, "?search=GLY").await;
    assert_eq!(ids(&products), ["p2"]);
}

#[tokio::test]
async fn test_merchant_filter() {
    let app = spawn_app().await;

    let products = list(&app, "?merchant=m1").await;
    assert_eq!(ids(&products), ["p1", "p3"]);
}

#[tokio::test]
async fn test_combined_filters_intersect() {
    let app = spawn_app().await;

    let products = list(&app, "?type=fertilizer&search=gly").await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_empty_query_values_do_not_filter() {
    let app = spawn_app().await;

    let products = list(&app, "?type=&search=&merchant=").await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_unknown_type_is_rejected() {
    let app = spawn_app().await;

    let resp = app
        .client
        .get(app.url("/products?type=seeds"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "BadRequest");
}

// ============================================================================
// Create & Update
// ============================================================================

#[tokio::test]
async fn test_create_product() {
    let app = spawn_app().await;

    let resp = app
        .client
        .post(app.url("/products"))
        .json(&json!({
            "name": "DAP 18-46",
            "type": "fertilizer",
            "price": 1350,
            "qty": 40,
            "merchantId": "m1"
        }))
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], "p_1");
    assert_eq!(body["promoted"], false);
    assert_eq!(body["price"], 1350.0);

    // the new entry is unpromoted, so it lists last
    let products = list(&app, "").await;
    assert_eq!(ids(&products), ["p2", "p1", "p3", "p_1"]);
}

#[tokio::test]
async fn test_update_merges_supplied_fields() {
    let app = spawn_app().await;

    let resp = app
        .client
        .patch(app.url("/products/p1"))
        .json(&json!({"price": 999.5, "qty": 90}))
        .send()
        .await
        .expect("Failed to patch product");

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["id"], "p1");
    assert_eq!(body["name"], "Urea 46%");
    assert_eq!(body["price"], 999.5);
    assert_eq!(body["qty"], 90);
    assert_eq!(body["promoted"], false);
}

#[tokio::test]
async fn test_promoting_reorders_the_listing() {
    let app = spawn_app().await;

    let resp = app
        .client
        .patch(app.url("/products/p3"))
        .json(&json!({"promoted": true}))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), 200);

    let products = list(&app, "").await;
    assert_eq!(ids(&products), ["p2", "p3", "p1"]);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let app = spawn_app().await;

    let resp = app
        .client
        .patch(app.url("/products/p9"))
        .json(&json!({"promoted": true}))
        .send()
        .await
        .expect("Failed to patch product");

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "NotFound");
    assert_eq!(body["message"], "product not found: p9");
}
