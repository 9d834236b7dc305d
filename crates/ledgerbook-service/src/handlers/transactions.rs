//! Transaction handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ledgerbook_core::{Transaction, TransactionId, TransactionInput};
use ledgerbook_ledger::TransactionFilter;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a transaction delete.
#[derive(Debug, Serialize)]
pub struct DeleteTransactionResponse {
    /// Always `true` on success.
    pub deleted: bool,
}

/// `GET /api/transactions`
///
/// Accepts optional query parameters: `customerId`, `type`, `startDate`,
/// `endDate`.
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TransactionFilter>,
) -> Json<Vec<Transaction>> {
    Json(state.ledger.list_transactions(&filter))
}

/// `GET /api/transactions/:id`
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TransactionId>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state.ledger.get_transaction(id)?;
    Ok(Json(transaction))
}

/// `POST /api/transactions`
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(input): Json<TransactionInput>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let transaction = state.ledger.create_transaction(input).await?;

    info!(
        transaction_id = %transaction.id,
        customer_id = %transaction.customer_id,
        "transaction created"
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

/// `PUT /api/transactions/:id`
pub async fn update_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TransactionId>,
    Json(input): Json<TransactionInput>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state.ledger.update_transaction(id, input).await?;
    Ok(Json(transaction))
}

/// `DELETE /api/transactions/:id`
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<TransactionId>,
) -> Result<Json<DeleteTransactionResponse>, ApiError> {
    state.ledger.delete_transaction(id).await?;

    info!(transaction_id = %id, "transaction deleted");

    Ok(Json(DeleteTransactionResponse { deleted: true }))
}
