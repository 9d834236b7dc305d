//! Transaction listing filters.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use ledgerbook_core::{CustomerId, Transaction, TransactionType};

/// Optional narrowing criteria for listing transactions.
///
/// Each present key narrows the result: `customer_id` and `type` by equality,
/// the date bounds by inclusive range on the transaction's effective `date`.
/// An empty filter matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Only transactions belonging to this customer.
    pub customer_id: Option<CustomerId>,

    /// Only credits, or only debits.
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,

    /// Only transactions with `date >= start_date`.
    pub start_date: Option<DateTime<Utc>>,

    /// Only transactions with `date <= end_date`.
    pub end_date: Option<DateTime<Utc>>,
}

impl TransactionFilter {
    /// A filter that selects a single customer's transactions.
    #[must_use]
    pub fn for_customer(customer_id: CustomerId) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Self::default()
        }
    }

    /// Whether the given transaction passes every present criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(customer_id) = self.customer_id {
            if transaction.customer_id != customer_id {
                return false;
            }
        }
        if let Some(transaction_type) = self.transaction_type {
            if transaction.transaction_type != transaction_type {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if transaction.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if transaction.date > end {
                return false;
            }
        }
        true
    }
}
