//! File-backed persistence integration tests.
//!
//! These tests run the full HTTP surface against a `FileStore` and verify
//! that every mutation reaches disk, and that a second process-equivalent
//! (a fresh router over the same file) sees the same document.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use ledgerbook_ledger::Ledger;
use ledgerbook_service::{create_router, AppState, ServiceConfig};
use ledgerbook_store::FileStore;

async fn file_backed_server(path: &Path) -> TestServer {
    let store = Arc::new(FileStore::new(path));
    let ledger = Arc::new(Ledger::open(store).await.expect("Failed to open ledger"));

    let config = ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        data_file: path.to_string_lossy().to_string(),
        ..ServiceConfig::default()
    };

    let state = AppState::new(ledger, config);
    let router: Router = create_router(state);
    TestServer::new(router).expect("Failed to create test server")
}

#[tokio::test]
async fn mutations_survive_a_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("database.json");

    let customer_id = {
        let server = file_backed_server(&path).await;

        let response = server
            .post("/api/customers")
            .json(&json!({ "name": "Grace Hopper", "phone": "5551234567" }))
            .await;
        let body: serde_json::Value = response.json();
        let customer_id = body["id"].as_str().expect("id").to_string();

        server
            .post("/api/transactions")
            .json(&json!({
                "customerId": customer_id,
                "type": "credit",
                "amount": 99.99
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        customer_id
    };

    // A second server over the same file sees everything
    let server = file_backed_server(&path).await;

    let response = server.get("/api/health").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["customers"], 1);
    assert_eq!(body["transactions"], 1);

    let response = server
        .get(&format!("/api/customers/{customer_id}/balance"))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["balance"], 99.99);
}

#[tokio::test]
async fn deletes_reach_disk_too() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("database.json");

    {
        let server = file_backed_server(&path).await;

        let response = server
            .post("/api/customers")
            .json(&json!({ "name": "Grace Hopper", "phone": "5551234567" }))
            .await;
        let body: serde_json::Value = response.json();
        let customer_id = body["id"].as_str().expect("id");

        server
            .delete(&format!("/api/customers/{customer_id}"))
            .await
            .assert_status_ok();
    }

    let server = file_backed_server(&path).await;
    let response = server.get("/api/health").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["customers"], 0);
}
