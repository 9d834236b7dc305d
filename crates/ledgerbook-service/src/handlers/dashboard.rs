//! Dashboard handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerbook_ledger::DashboardStats;

use crate::state::AppState;

/// `GET /api/dashboard`
pub async fn dashboard_stats(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    Json(state.ledger.dashboard_stats())
}
