//! The ledger repository for ledgerbook.
//!
//! This crate owns the authoritative in-memory collections of customers and
//! transactions. All reads and mutations go through [`Ledger`], which
//! enforces the referential and validation invariants, computes balances and
//! dashboard aggregates, and persists a whole-document snapshot through a
//! [`ledgerbook_store::SnapshotStore`].
//!
//! # Durability
//!
//! Every completed mutation triggers a save. A failed save is logged and does
//! not roll back the in-memory mutation: the ledger deliberately trades
//! durability for availability, and the [`autosave`] checkpoint retries on
//! its next tick. Saves are atomic at the store level, so the persisted
//! document is always a consistent snapshot.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod autosave;
pub mod filter;
pub mod ledger;
pub mod seed;
pub mod stats;

pub use autosave::spawn_autosave;
pub use filter::TransactionFilter;
pub use ledger::Ledger;
pub use stats::{CustomerBalance, DashboardStats, RecentTransaction};
