//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{customers, dashboard, health, restore, transactions};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Customers
/// - `GET /api/customers` - List customers
/// - `POST /api/customers` - Create customer
/// - `GET /api/customers/:id` - Get one customer
/// - `PUT /api/customers/:id` - Update customer
/// - `DELETE /api/customers/:id` - Delete customer (cascades to transactions)
/// - `GET /api/customers/:id/balance` - Customer balance summary
///
/// ## Transactions
/// - `GET /api/transactions` - List transactions (filterable)
/// - `POST /api/transactions` - Create transaction
/// - `GET /api/transactions/:id` - Get one transaction
/// - `PUT /api/transactions/:id` - Update transaction
/// - `DELETE /api/transactions/:id` - Delete transaction
///
/// ## Dashboard
/// - `GET /api/dashboard` - Aggregate stats and recent activity
///
/// ## System
/// - `GET /api/health` - Health check
/// - `POST /api/restore` - Replace the whole document
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        // Health (public)
        .route("/api/health", get(health::health))
        // Customers
        .route(
            "/api/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/api/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .route("/api/customers/:id/balance", get(customers::customer_balance))
        // Transactions
        .route(
            "/api/transactions",
            get(transactions::list_transactions).post(transactions::create_transaction),
        )
        .route(
            "/api/transactions/:id",
            get(transactions::get_transaction)
                .put(transactions::update_transaction)
                .delete(transactions::delete_transaction),
        )
        // Dashboard
        .route("/api/dashboard", get(dashboard::dashboard_stats))
        // Restore
        .route("/api/restore", post(restore::restore))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
