//! Transaction records: credits and debits against a customer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::{LedgerError, Result};
use crate::ids::{CustomerId, TransactionId};

/// Maximum transaction description length.
pub const DESCRIPTION_MAX: usize = 500;

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money owed to the book increases.
    Credit,
    /// Money owed to the book decreases.
    Debit,
}

impl TransactionType {
    /// Default description for transactions of this type.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::Debit => "Debit",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => f.write_str("credit"),
            Self::Debit => f.write_str("debit"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(LedgerError::validation(
                "type must be either credit or debit",
            )),
        }
    }
}

/// A credit or debit against a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned on creation and never reused.
    pub id: TransactionId,

    /// The customer this transaction belongs to. Must reference an existing
    /// customer at creation time.
    pub customer_id: CustomerId,

    /// Credit or debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    /// Positive amount, 0.01–999999.99.
    pub amount: Amount,

    /// Free-form description, up to 500 characters.
    pub description: String,

    /// Effective date. Caller-suppliable for backdating; defaults to creation
    /// time.
    pub date: DateTime<Utc>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating or updating a transaction.
///
/// Required fields are optional at the serialization layer so that omissions
/// surface as a `Validation` error. `type` is accepted as a free string and
/// checked here, so an unknown value reports "type must be either credit or
/// debit" instead of a deserialize failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    /// Owning customer. Required, also on update.
    pub customer_id: Option<CustomerId>,
    /// "credit" or "debit". Required.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Decimal amount. Required, positive, 0.01–999999.99.
    pub amount: Option<f64>,
    /// Description. Defaults to "Credit"/"Debit" by type when absent.
    pub description: Option<String>,
    /// Effective date. Defaults to now.
    pub date: Option<DateTime<Utc>>,
}

/// A transaction input that has passed field validation.
///
/// The referential check (does `customer_id` exist?) is the ledger's job; this
/// type only guarantees the fields themselves are well-formed.
#[derive(Debug, Clone)]
pub struct ValidatedTransaction {
    /// Owning customer, not yet checked for existence.
    pub customer_id: CustomerId,
    /// Credit or debit.
    pub transaction_type: TransactionType,
    /// Parsed fixed-point amount.
    pub amount: Amount,
    /// Description, defaulted from the type when absent.
    pub description: String,
    /// Effective date, defaulted to now when absent.
    pub date: DateTime<Utc>,
}

impl TransactionInput {
    /// Validate every field of the input.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` when a required field is missing,
    /// the type is not credit/debit, the amount is out of range, or the
    /// description is too long.
    pub fn validate(self) -> Result<ValidatedTransaction> {
        let missing = || LedgerError::validation("customer ID, type, and amount are required");

        let customer_id = self.customer_id.ok_or_else(missing)?;
        let type_str = self.transaction_type.ok_or_else(missing)?;
        let raw_amount = self.amount.ok_or_else(missing)?;

        let transaction_type: TransactionType = type_str.parse()?;
        let amount =
            Amount::parse_transaction_amount(raw_amount).map_err(LedgerError::Validation)?;

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX {
                return Err(LedgerError::validation(format!(
                    "description must be at most {DESCRIPTION_MAX} characters"
                )));
            }
        }

        let description = self
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| transaction_type.default_description().to_string());

        Ok(ValidatedTransaction {
            customer_id,
            transaction_type,
            amount,
            description,
            date: self.date.unwrap_or_else(Utc::now),
        })
    }
}

impl Transaction {
    /// Build a new transaction record from validated input.
    ///
    /// Assigns a fresh id and sets `created_at` = `updated_at` = now.
    #[must_use]
    pub fn create(fields: ValidatedTransaction) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::generate(),
            customer_id: fields.customer_id,
            transaction_type: fields.transaction_type,
            amount: fields.amount,
            description: fields.description,
            date: fields.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and bump `updated_at`.
    ///
    /// `id` and `created_at` are preserved.
    pub fn apply_update(&mut self, fields: ValidatedTransaction) {
        self.customer_id = fields.customer_id;
        self.transaction_type = fields.transaction_type;
        self.amount = fields.amount;
        self.description = fields.description;
        self.date = fields.date;
        self.updated_at = Utc::now();
    }
}
