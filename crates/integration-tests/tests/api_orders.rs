//! Integration tests for order placement and merchant order listing.

use serde_json::{Value, json};

use krishibazaar_integration_tests::{TestApp, spawn_app};

async fn place_order(app: &TestApp, order: &Value) -> Value {
    let resp = app
        .client
        .post(app.url("/orders"))
        .json(order)
        .send()
        .await
        .expect("Failed to place order");
    assert_eq!(resp.status(), 201);
    resp.json().await.expect("Failed to parse body")
}

async fn merchant_orders(app: &TestApp, merchant: &str) -> Vec<Value> {
    let resp = app
        .client
        .get(app.url(&format!("/merchants/{merchant}/orders")))
        .send()
        .await
        .expect("Failed to list merchant orders");
    assert_eq!(resp.status(), 200);
    resp.json().await.expect("Failed to parse body")
}

#[tokio::test]
async fn test_place_order_returns_stamped_record() {
    let app = spawn_app().await;

    let body = place_order(
        &app,
        &json!({
            "buyerId": "u1",
            "items": [
                {"id": "p1", "name": "Urea 46%", "price": 450, "qty": 2, "merchantId": "m1"}
            ]
        }),
    )
    .await;

    assert_eq!(body["id"], "o_1");
    assert_eq!(body["buyerId"], "u1");
    assert!(body["date"].is_string());
    assert_eq!(body["items"][0]["qty"], 2);
    assert_eq!(body["items"][0]["merchantId"], "m1");
}

#[tokio::test]
async fn test_order_snapshot_survives_repricing() {
    let app = spawn_app().await;

    place_order(
        &app,
        &json!({
            "buyerId": "u1",
            "items": [
                {"id": "p1", "name": "Urea 46%", "price": 450, "qty": 2, "merchantId": "m1"}
            ]
        }),
    )
    .await;

    // reprice the product after the order was placed
    let resp = app
        .client
        .patch(app.url("/products/p1"))
        .json(&json!({"price": 9999}))
        .send()
        .await
        .expect("Failed to patch product");
    assert_eq!(resp.status(), 200);

    let orders = merchant_orders(&app, "m1").await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["items"][0]["price"], 450.0);
}

#[tokio::test]
async fn test_merchant_listing_matches_any_item() {
    let app = spawn_app().await;

    place_order(
        &app,
        &json!({
            "buyerId": "u1",
            "items": [
                {"id": "p1", "name": "Urea 46%", "price": 450, "qty": 1, "merchantId": "m1"},
                {"id": "p2", "name": "Glyphosate 41%", "price": 1200, "qty": 1, "merchantId": "m2"}
            ]
        }),
    )
    .await;
    place_order(
        &app,
        &json!({
            "buyerId": "u1",
            "items": [
                {"id": "p2", "name": "Glyphosate 41%", "price": 1200, "qty": 3, "merchantId": "m2"}
            ]
        }),
    )
    .await;

    // the mixed order shows up for both merchants, whole
    let for_m1 = merchant_orders(&app, "m1").await;
    assert_eq!(for_m1.len(), 1);
    assert_eq!(for_m1[0]["id"], "o_1");
    assert_eq!(for_m1[0]["items"].as_array().map(Vec::len), Some(2));

    let for_m2 = merchant_orders(&app, "m2").await;
    assert_eq!(for_m2.len(), 2);

    let for_stranger = merchant_orders(&app, "m9").await;
    assert!(for_stranger.is_empty());
}
