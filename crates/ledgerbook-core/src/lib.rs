//! Core types for ledgerbook.
//!
//! This crate provides the foundational types used throughout the ledgerbook
//! backend:
//!
//! - **Identifiers**: `CustomerId`, `TransactionId`
//! - **Records**: `Customer`, `Transaction`, `TransactionType`
//! - **Money**: `Amount`
//! - **Persistence document**: `Snapshot`
//!
//! # Money representation
//!
//! Amounts are decimal currency values between 0.01 and 999999.99. They are
//! stored as `i64` integer cents to avoid floating point precision issues, so
//! balance sums are exact and reproducible. On the wire and in the persisted
//! snapshot an amount is a plain JSON decimal number (`1000` means 1000.00),
//! matching the document layout this service has always used.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod amount;
pub mod customer;
pub mod error;
pub mod ids;
pub mod snapshot;
pub mod transaction;

pub use amount::Amount;
pub use customer::{Customer, CustomerInput};
pub use error::{LedgerError, Result};
pub use ids::{CustomerId, IdError, TransactionId};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use transaction::{Transaction, TransactionInput, TransactionType, ValidatedTransaction};
