//! In-process snapshot storage.

use std::sync::Mutex;

use async_trait::async_trait;
use ledgerbook_core::Snapshot;

use crate::error::Result;
use crate::SnapshotStore;

/// In-memory snapshot storage.
///
/// Holds the last saved document in process memory. Used by tests and by the
/// ephemeral server mode where durability is not wanted; behaviourally
/// identical to [`crate::FileStore`] minus the disk.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Snapshot>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a save has ever completed (for tests).
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.inner.lock().is_ok_and(|guard| guard.is_some())
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self) -> Result<Snapshot> {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(guard.clone().unwrap_or_default())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = Some(snapshot.clone());
        Ok(())
    }
}
