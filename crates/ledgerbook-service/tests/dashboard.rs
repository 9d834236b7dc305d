//! Dashboard endpoint integration tests.

mod common;

use common::TestHarness;

#[tokio::test]
async fn dashboard_on_empty_ledger_is_all_zeroes() {
    let harness = TestHarness::new().await;

    let response = harness.server.get("/api/dashboard").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["totalCustomers"], 0);
    assert_eq!(body["totalTransactions"], 0);
    assert_eq!(body["totalCredits"], 0.0);
    assert_eq!(body["totalDebits"], 0.0);
    assert_eq!(body["netBalance"], 0.0);
    assert_eq!(body["recentTransactions"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn dashboard_reflects_seeded_sample_data() {
    let harness = TestHarness::seeded().await;

    let response = harness.server.get("/api/dashboard").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["totalCustomers"], 2);
    assert_eq!(body["totalTransactions"], 2);
    assert_eq!(body["totalCredits"], 1000.0);
    assert_eq!(body["totalDebits"], 500.0);
    assert_eq!(body["netBalance"], 500.0);

    let recent = body["recentTransactions"].as_array().expect("array");
    assert_eq!(recent.len(), 2);
    // Every recent entry carries the customer name alongside the transaction
    assert!(recent.iter().all(|t| t["customerName"].is_string()));
}

#[tokio::test]
async fn dashboard_caps_recent_transactions_at_five() {
    let harness = TestHarness::new().await;
    let customer_id = harness.create_customer("Ada Lovelace", "1234567890").await;
    for i in 1..=8 {
        harness
            .create_transaction(&customer_id, "credit", f64::from(i))
            .await;
    }

    let response = harness.server.get("/api/dashboard").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["totalTransactions"], 8);
    assert_eq!(body["recentTransactions"].as_array().map(Vec::len), Some(5));
}
