//! Whole-document restore handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use ledgerbook_core::{Customer, Transaction};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/restore`.
///
/// The document is wrapped in a `data` envelope so that a raw snapshot file
/// cannot be posted by accident.
#[derive(Debug, Deserialize)]
pub struct RestoreRequest {
    /// The replacement document.
    pub data: Option<RestoreDocument>,
}

/// The replacement collections inside a restore request.
#[derive(Debug, Deserialize)]
pub struct RestoreDocument {
    /// Full replacement customer list.
    pub customers: Option<Vec<Customer>>,
    /// Full replacement transaction list.
    pub transactions: Option<Vec<Transaction>>,
}

/// Response body for a successful restore.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Number of customers now in the document.
    pub customers: usize,
    /// Number of transactions now in the document.
    pub transactions: usize,
}

/// `POST /api/restore`
pub async fn restore(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RestoreRequest>,
) -> Result<Json<RestoreResponse>, ApiError> {
    let Some(document) = request.data else {
        return Err(ApiError::BadRequest("invalid data format".into()));
    };
    let (Some(customers), Some(transactions)) = (document.customers, document.transactions) else {
        return Err(ApiError::BadRequest("invalid data format".into()));
    };

    let (customers, transactions) = state.ledger.restore(customers, transactions).await?;

    info!(customers, transactions, "document restored via API");

    Ok(Json(RestoreResponse {
        message: "Data restored successfully".into(),
        customers,
        transactions,
    }))
}
