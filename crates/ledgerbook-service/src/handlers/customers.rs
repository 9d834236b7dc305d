//! Customer handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ledgerbook_core::{Customer, CustomerId, CustomerInput};
use ledgerbook_ledger::CustomerBalance;
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a customer delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCustomerResponse {
    /// Always `true` on success.
    pub deleted: bool,
    /// Number of transactions removed along with the customer.
    pub cascaded_transactions: usize,
}

/// `GET /api/customers`
pub async fn list_customers(State(state): State<Arc<AppState>>) -> Json<Vec<Customer>> {
    Json(state.ledger.list_customers())
}

/// `GET /api/customers/:id`
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.ledger.get_customer(id)?;
    Ok(Json(customer))
}

/// `POST /api/customers`
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CustomerInput>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = state.ledger.create_customer(input).await?;

    info!(customer_id = %customer.id, "customer created");

    Ok((StatusCode::CREATED, Json(customer)))
}

/// `PUT /api/customers/:id`
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
    Json(input): Json<CustomerInput>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state.ledger.update_customer(id, input).await?;
    Ok(Json(customer))
}

/// `DELETE /api/customers/:id`
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<DeleteCustomerResponse>, ApiError> {
    let cascaded = state.ledger.delete_customer(id).await?;

    info!(customer_id = %id, cascaded, "customer deleted");

    Ok(Json(DeleteCustomerResponse {
        deleted: true,
        cascaded_transactions: cascaded,
    }))
}

/// `GET /api/customers/:id/balance`
pub async fn customer_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerBalance>, ApiError> {
    let balance = state.ledger.customer_balance(id)?;
    Ok(Json(balance))
}
