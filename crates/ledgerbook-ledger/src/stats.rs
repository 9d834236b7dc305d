//! Derived balance and dashboard records.

use serde::Serialize;

use ledgerbook_core::{Amount, CustomerId, Transaction};

/// A single customer's derived balance.
///
/// `balance` is the signed sum of the customer's transactions: credits
/// positive, debits negative. All three totals are exact cent sums and
/// independent of transaction order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBalance {
    /// The customer this balance belongs to.
    pub customer_id: CustomerId,
    /// The customer's display name.
    pub customer_name: String,
    /// `total_credits - total_debits`.
    pub balance: Amount,
    /// Sum of credit amounts.
    pub total_credits: Amount,
    /// Sum of debit amounts.
    pub total_debits: Amount,
    /// Number of transactions counted.
    pub transaction_count: usize,
}

/// A transaction annotated with its customer's display name for the
/// dashboard's recent-activity list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    /// The underlying transaction record.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// The owning customer's name, or "Unknown" when the customer no longer
    /// exists.
    pub customer_name: String,
}

/// Whole-book dashboard aggregates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of customers.
    pub total_customers: usize,
    /// Number of transactions.
    pub total_transactions: usize,
    /// Sum of all credit amounts.
    pub total_credits: Amount,
    /// Sum of all debit amounts.
    pub total_debits: Amount,
    /// `total_credits - total_debits`.
    pub net_balance: Amount,
    /// The 5 most recent transactions by `date` descending, ties keeping
    /// insertion order.
    pub recent_transactions: Vec<RecentTransaction>,
}
