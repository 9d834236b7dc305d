//! First-run sample data.

use ledgerbook_core::{CustomerInput, Result, TransactionInput};

use crate::ledger::Ledger;

impl Ledger {
    /// Populate an empty ledger with deterministic starter records.
    ///
    /// Inserts two customers and two transactions (one credit, one debit) on
    /// first run, then persists. Idempotent: once any data exists this does
    /// nothing and returns `false`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if a sample record fails validation, which would
    /// indicate a bug here rather than bad input.
    pub async fn seed_sample_data(&self) -> Result<bool> {
        let (customers, transactions) = self.counts();
        if customers > 0 || transactions > 0 {
            tracing::debug!("ledger already has data, skipping sample seed");
            return Ok(false);
        }

        let john = self
            .create_customer(CustomerInput {
                name: Some("John Doe".into()),
                phone: Some("+1234567890".into()),
                email: Some("john@example.com".into()),
                address: Some("123 Main St, City, State".into()),
            })
            .await?;

        let jane = self
            .create_customer(CustomerInput {
                name: Some("Jane Smith".into()),
                phone: Some("+0987654321".into()),
                email: Some("jane@example.com".into()),
                address: Some("456 Oak Ave, Town, State".into()),
            })
            .await?;

        self.create_transaction(TransactionInput {
            customer_id: Some(john.id),
            transaction_type: Some("credit".into()),
            amount: Some(1000.0),
            description: Some("Initial payment".into()),
            date: None,
        })
        .await?;

        self.create_transaction(TransactionInput {
            customer_id: Some(jane.id),
            transaction_type: Some("debit".into()),
            amount: Some(500.0),
            description: Some("Service charge".into()),
            date: None,
        })
        .await?;

        tracing::info!("sample data created");
        Ok(true)
    }
}
