//! Common test utilities for ledgerbook integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;

use ledgerbook_ledger::Ledger;
use ledgerbook_service::{create_router, AppState, ServiceConfig};
use ledgerbook_store::MemoryStore;

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct handle onto the repository behind the server.
    pub ledger: Arc<Ledger>,
}

impl TestHarness {
    /// Create a new test harness backed by an empty in-memory store.
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let ledger = Arc::new(
            Ledger::open(store)
                .await
                .expect("Failed to open empty ledger"),
        );

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            ..ServiceConfig::default()
        };

        let state = AppState::new(Arc::clone(&ledger), config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, ledger }
    }

    /// Create a harness with the built-in sample data already seeded.
    pub async fn seeded() -> Self {
        let harness = Self::new().await;
        harness
            .ledger
            .seed_sample_data()
            .await
            .expect("Failed to seed sample data");
        harness
    }

    /// Create a customer through the API and return its id.
    pub async fn create_customer(&self, name: &str, phone: &str) -> String {
        let response = self
            .server
            .post("/api/customers")
            .json(&json!({ "name": name, "phone": phone }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        body["id"].as_str().expect("customer id missing").to_string()
    }

    /// Create a transaction through the API and return its id.
    pub async fn create_transaction(
        &self,
        customer_id: &str,
        transaction_type: &str,
        amount: f64,
    ) -> String {
        let response = self
            .server
            .post("/api/transactions")
            .json(&json!({
                "customerId": customer_id,
                "type": transaction_type,
                "amount": amount,
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        body["id"].as_str().expect("transaction id missing").to_string()
    }
}
