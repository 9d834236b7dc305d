//! Health check handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` when the service can answer.
    pub status: &'static str,
    /// Time the check was served.
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Number of customers currently in memory.
    pub customers: usize,
    /// Number of transactions currently in memory.
    pub transactions: usize,
}

/// `GET /api/health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (customers, transactions) = state.ledger.counts();

    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now(),
        customers,
        transactions,
    })
}
