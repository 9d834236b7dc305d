//! ledgerbook HTTP API Service.
//!
//! Thin plumbing over the ledger repository:
//!
//! - Customer management
//! - Transaction tracking with filters
//! - Per-customer balances and the dashboard summary
//! - Whole-document restore
//!
//! All business rules live in `ledgerbook-ledger`; this crate only maps
//! HTTP verbs and paths onto repository operations and domain errors onto
//! status codes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Read-only handlers stay async for consistency

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{Persistence, ServiceConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
