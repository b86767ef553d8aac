mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn order_total_is_sum_of_line_totals() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/orders", app.address))
        .json(&json!({
            "items": [
                { "ref": "pizza", "price": 10.0, "quantity": 2 },
                { "ref": "soda", "price": 2.5, "quantity": 3 }
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["total"], 27.5);
    assert!(!body["id"].as_str().expect("id should be a string").is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn empty_order_succeeds_with_zero_total() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/orders", app.address))
        .json(&json!({ "items": [] }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["total"], 0.0);

    app.cleanup().await;
}

#[tokio::test]
async fn zero_quantity_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/orders", app.address))
        .json(&json!({
            "items": [{ "ref": "pizza", "price": 10.0, "quantity": 0 }]
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 422);

    app.cleanup().await;
}

#[tokio::test]
async fn unset_customer_fields_are_not_persisted() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/orders", app.address))
        .json(&json!({
            "items": [{ "ref": "pizza", "price": 10.0, "quantity": 1 }],
            "customer_name": "Ada"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let stored = app.db.list("order").await.expect("Failed to list orders");
    assert_eq!(stored.len(), 1);

    let fields = stored[0].as_object().expect("order should be an object");
    assert_eq!(fields["customer_name"], "Ada");
    assert_eq!(fields["total"], 10.0);
    assert!(!fields.contains_key("customer_phone"));
    assert!(!fields.contains_key("delivery_address"));
    assert!(fields["id"].is_string());

    app.cleanup().await;
}
