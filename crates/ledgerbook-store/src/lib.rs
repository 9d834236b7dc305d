//! Snapshot storage for ledgerbook.
//!
//! This crate persists the whole-document [`Snapshot`]; there is no
//! incremental log. The in-memory ledger is the single source of truth
//! between saves; a completed save makes the stored document converge with
//! memory.
//!
//! Two backends implement the same trait:
//!
//! - [`FileStore`]: one JSON file on disk, written atomically
//!   (temp file + rename) so a crash mid-write never corrupts the
//!   previously committed version.
//! - [`MemoryStore`]: in-process only, for tests and the ephemeral server
//!   mode.
//!
//! # Example
//!
//! ```no_run
//! use ledgerbook_store::{FileStore, SnapshotStore};
//!
//! # async fn demo() -> ledgerbook_store::Result<()> {
//! let store = FileStore::new("/var/lib/ledgerbook/database.json");
//! let snapshot = store.load().await?;
//! store.save(&snapshot).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod file;
pub mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use ledgerbook_core::Snapshot;

/// A durable home for the whole-document snapshot.
///
/// Implementations must make `save` atomic: after a crash the reader sees
/// either the previous document or the new one, never a torn write.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the persisted document.
    ///
    /// A store that has never been written returns an empty document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on any read or parse failure other than the
    /// document not existing yet.
    async fn load(&self) -> Result<Snapshot>;

    /// Persist the document durably.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on serialization or I/O failure. Callers log and
    /// continue: a failed save never rolls back in-memory state.
    async fn save(&self, snapshot: &Snapshot) -> Result<()>;
}
