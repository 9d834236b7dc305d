//! The persisted whole-document snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::transaction::Transaction;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// The full serialized document representing ledger state at a point in time.
///
/// Layout (for compatibility with existing data files):
/// `{customers, transactions, lastUpdated, version}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// All customers, insertion order.
    #[serde(default)]
    pub customers: Vec<Customer>,

    /// All transactions, insertion order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// When the document was last written. `None` for a never-saved document.
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    /// Format version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    SNAPSHOT_VERSION.to_string()
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            transactions: Vec::new(),
            last_updated: None,
            version: default_version(),
        }
    }
}

impl Snapshot {
    /// Whether the document holds no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_defaults() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.last_updated.is_none());
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    }

    #[test]
    fn serde_uses_camel_case() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("customers").is_some());
        assert!(json.get("transactions").is_some());
    }
}
