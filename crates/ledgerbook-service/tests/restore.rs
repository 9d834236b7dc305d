//! Restore endpoint integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

fn sample_document() -> serde_json::Value {
    let customer_id = "11111111-1111-4111-8111-111111111111";
    json!({
        "customers": [{
            "id": customer_id,
            "name": "Grace Hopper",
            "phone": "5551234567",
            "email": "grace@example.com",
            "address": "",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }],
        "transactions": [{
            "id": "22222222-2222-4222-8222-222222222222",
            "customerId": customer_id,
            "type": "credit",
            "amount": 75.25,
            "description": "Imported entry",
            "date": "2024-01-02T00:00:00Z",
            "createdAt": "2024-01-02T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }]
    })
}

#[tokio::test]
async fn restore_replaces_the_whole_document() {
    let harness = TestHarness::seeded().await;

    let response = harness
        .server
        .post("/api/restore")
        .json(&json!({ "data": sample_document() }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Data restored successfully");
    assert_eq!(body["customers"], 1);
    assert_eq!(body["transactions"], 1);

    // Prior seeded data is gone; only the supplied document remains
    let response = harness.server.get("/api/customers").await;
    let body: serde_json::Value = response.json();
    let customers = body.as_array().expect("array");
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["name"], "Grace Hopper");
}

#[tokio::test]
async fn restore_without_data_envelope_is_bad_request() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/api/restore")
        .json(&json!({ "customers": [], "transactions": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["message"], "invalid data format");
}

#[tokio::test]
async fn restore_with_missing_collections_is_bad_request() {
    let harness = TestHarness::new().await;

    let response = harness
        .server
        .post("/api/restore")
        .json(&json!({ "data": { "customers": [] } }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn restore_rejects_dangling_transaction_references() {
    let harness = TestHarness::seeded().await;

    let mut document = sample_document();
    document["transactions"][0]["customerId"] = json!("33333333-3333-4333-8333-333333333333");

    let response = harness
        .server
        .post("/api/restore")
        .json(&json!({ "data": document }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // The seeded state is untouched
    let response = harness.server.get("/api/health").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["customers"], 2);
    assert_eq!(body["transactions"], 2);
}
