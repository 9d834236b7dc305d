//! JSON file snapshot storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use ledgerbook_core::Snapshot;

use crate::error::Result;
use crate::SnapshotStore;

/// File-backed snapshot storage.
///
/// The document lives in a single JSON file. Saves write a sibling temp file,
/// fsync it, then atomically rename it over the final path, so a crash during
/// a save leaves the previously committed document intact.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file and its parent directory are created on first save.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn load(&self) -> Result<Snapshot> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
                Ok(Snapshot::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).await?;
            }
        }

        let data = serde_json::to_vec_pretty(snapshot)?;
        let tmp_path = self.tmp_path();

        // Write to temp file and fsync before the rename makes it visible.
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(&data).await?;
        file.sync_all().await?;
        drop(file);

        // Atomic replace of the committed document.
        fs::rename(&tmp_path, &self.path).await?;

        // fsync the directory so the rename itself is durable.
        #[cfg(unix)]
        if let Some(dir) = self.path.parent() {
            if let Ok(dir) = std::fs::File::open(dir) {
                let _ = dir.sync_all();
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            bytes = data.len(),
            "snapshot saved"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerbook_core::{Customer, CustomerInput, Transaction, TransactionInput};
    use tempfile::TempDir;

    fn sample_snapshot() -> Snapshot {
        let customer = Customer::create(CustomerInput {
            name: Some("John Doe".into()),
            phone: Some("+1234567890".into()),
            ..CustomerInput::default()
        })
        .unwrap();
        let transaction = Transaction::create(
            TransactionInput {
                customer_id: Some(customer.id),
                transaction_type: Some("credit".into()),
                amount: Some(1000.0),
                ..TransactionInput::default()
            }
            .validate()
            .unwrap(),
        );
        Snapshot {
            customers: vec![customer],
            transactions: vec![transaction],
            last_updated: Some(chrono::Utc::now()),
            ..Snapshot::default()
        }
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("database.json"));

        let snapshot = store.load().await.unwrap();
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("database.json"));

        let snapshot = sample_snapshot();
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn save_load_save_is_stable() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("database.json"));

        store.save(&sample_snapshot()).await.unwrap();
        let first = std::fs::read(store.path()).unwrap();

        let loaded = store.load().await.unwrap();
        store.save(&loaded).await.unwrap();
        let second = std::fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested/data/database.json"));

        store.save(&Snapshot::default()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("database.json"));

        store.save(&sample_snapshot()).await.unwrap();
        store.save(&sample_snapshot()).await.unwrap();

        let temp_files = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .is_some_and(|name| name.ends_with(".tmp"))
            })
            .count();
        assert_eq!(temp_files, 0);
    }

    #[tokio::test]
    async fn load_rejects_corrupt_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileStore::new(path);
        assert!(matches!(
            store.load().await,
            Err(crate::StoreError::Serialization(_))
        ));
    }
}
