//! Error types for ledgerbook.

use crate::ids::{CustomerId, TransactionId};

/// Result type for ledgerbook operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur in ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Caller input was missing or out of range.
    ///
    /// Recoverable per request; the in-memory state is never touched before
    /// validation passes.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Customer not found.
    #[error("customer not found: {customer_id}")]
    CustomerNotFound {
        /// The customer ID that was not found.
        customer_id: CustomerId,
    },

    /// Transaction not found.
    #[error("transaction not found: {transaction_id}")]
    TransactionNotFound {
        /// The transaction ID that was not found.
        transaction_id: TransactionId,
    },

    /// Storage error (load or save).
    #[error("storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Shorthand for a validation error with a message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
