//! The ledger repository.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;

use ledgerbook_core::{
    Amount, Customer, CustomerId, CustomerInput, LedgerError, Result, Snapshot, Transaction,
    TransactionId, TransactionInput, TransactionType,
};
use ledgerbook_store::SnapshotStore;

use crate::filter::TransactionFilter;
use crate::stats::{CustomerBalance, DashboardStats, RecentTransaction};

/// How many transactions the dashboard's recent-activity list shows.
const RECENT_TRANSACTIONS: usize = 5;

/// The in-memory collections. Mutated only under the write lock, so every
/// read-modify-write sequence is atomic from a caller's perspective.
#[derive(Debug, Default)]
struct LedgerState {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

impl LedgerState {
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            customers: self.customers.clone(),
            transactions: self.transactions.clone(),
            last_updated: Some(Utc::now()),
            ..Snapshot::default()
        }
    }

    fn customer(&self, id: CustomerId) -> Result<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .ok_or(LedgerError::CustomerNotFound { customer_id: id })
    }

    fn customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(LedgerError::CustomerNotFound { customer_id: id })
    }

    fn transaction_mut(&mut self, id: TransactionId) -> Result<&mut Transaction> {
        self.transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound { transaction_id: id })
    }
}

/// The single owner of the customer and transaction collections.
///
/// All operations validate before mutating, so a failed call never leaves
/// partial state behind. Mutations are serialized by an internal lock;
/// persistence runs after the lock is released and is serialized separately,
/// so concurrent mutations can never race a half-written document (the store
/// additionally renames atomically).
///
/// # Durability trade-off
///
/// A mutation that succeeds in memory is committed even if the follow-up save
/// fails: the failure is logged and the next checkpoint retries. Callers are
/// never rolled back for storage trouble.
pub struct Ledger {
    state: RwLock<LedgerState>,
    store: Arc<dyn SnapshotStore>,
    /// Bumped on every completed mutation.
    revision: AtomicU64,
    /// The highest revision known to be durably saved.
    persisted: AtomicU64,
    /// Serializes saves so one snapshot write never overlaps another.
    save_lock: tokio::sync::Mutex<()>,
}

impl Ledger {
    /// Open the ledger, loading the persisted document from the store.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` when the document exists but cannot be
    /// read or parsed. A missing document starts the ledger empty.
    pub async fn open(store: Arc<dyn SnapshotStore>) -> Result<Self> {
        let snapshot = store.load().await?;
        tracing::info!(
            customers = snapshot.customers.len(),
            transactions = snapshot.transactions.len(),
            "ledger loaded"
        );

        Ok(Self {
            state: RwLock::new(LedgerState {
                customers: snapshot.customers,
                transactions: snapshot.transactions,
            }),
            store,
            revision: AtomicU64::new(0),
            persisted: AtomicU64::new(0),
            save_lock: tokio::sync::Mutex::new(()),
        })
    }

    fn read<T>(&self, f: impl FnOnce(&LedgerState) -> T) -> T {
        let guard = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run a mutation under the write lock, bump the revision, then persist.
    async fn mutate<T>(&self, f: impl FnOnce(&mut LedgerState) -> Result<T>) -> Result<T> {
        let value = {
            let mut guard = self
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let value = f(&mut guard)?;
            self.revision.fetch_add(1, Ordering::SeqCst);
            value
        };

        if let Err(e) = self.flush().await {
            tracing::error!(error = %e, "snapshot save failed; in-memory mutation retained");
        }

        Ok(value)
    }

    /// Whether in-memory state is ahead of the last successful save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.revision.load(Ordering::SeqCst) > self.persisted.load(Ordering::SeqCst)
    }

    /// Persist the newest state if it is ahead of the last successful save.
    ///
    /// Saves never overlap; a caller that loses the race to a newer save
    /// simply finds nothing left to do.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` when the write fails. In-memory state
    /// is unaffected and stays dirty, so the next flush retries.
    pub async fn flush(&self) -> Result<()> {
        let _guard = self.save_lock.lock().await;

        let (snapshot, revision) = {
            let state = self
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            (state.snapshot(), self.revision.load(Ordering::SeqCst))
        };

        if revision <= self.persisted.load(Ordering::SeqCst) {
            return Ok(());
        }

        self.store.save(&snapshot).await?;
        self.persisted.fetch_max(revision, Ordering::SeqCst);
        Ok(())
    }

    /// Current `(customers, transactions)` collection sizes.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        self.read(|state| (state.customers.len(), state.transactions.len()))
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// All customers in insertion order.
    #[must_use]
    pub fn list_customers(&self) -> Vec<Customer> {
        self.read(|state| state.customers.clone())
    }

    /// Look up one customer.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` when the id is absent.
    pub fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.read(|state| state.customer(id).cloned())
    }

    /// Create a customer from caller input.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when `name` or `phone` is missing or out of
    /// bounds.
    pub async fn create_customer(&self, input: CustomerInput) -> Result<Customer> {
        let customer = self
            .mutate(|state| {
                let customer = Customer::create(input)?;
                state.customers.push(customer.clone());
                Ok(customer)
            })
            .await?;

        tracing::info!(customer_id = %customer.id, name = %customer.name, "customer created");
        Ok(customer)
    }

    /// Replace a customer's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` when the id is absent, `Validation` on bad
    /// input; the record is untouched on failure.
    pub async fn update_customer(&self, id: CustomerId, input: CustomerInput) -> Result<Customer> {
        let customer = self
            .mutate(|state| {
                let customer = state.customer_mut(id)?;
                customer.apply_update(input)?;
                Ok(customer.clone())
            })
            .await?;

        tracing::info!(customer_id = %id, "customer updated");
        Ok(customer)
    }

    /// Delete a customer and every transaction referencing it.
    ///
    /// The two collection mutations happen under one lock acquisition - no
    /// caller ever observes the customer gone with its transactions still
    /// present, or vice versa. Returns the number of cascaded transactions.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` when the id is absent.
    pub async fn delete_customer(&self, id: CustomerId) -> Result<usize> {
        let removed = self
            .mutate(|state| {
                let index = state
                    .customers
                    .iter()
                    .position(|c| c.id == id)
                    .ok_or(LedgerError::CustomerNotFound { customer_id: id })?;

                state.customers.remove(index);
                let before = state.transactions.len();
                state.transactions.retain(|t| t.customer_id != id);
                Ok(before - state.transactions.len())
            })
            .await?;

        tracing::info!(
            customer_id = %id,
            cascaded_transactions = removed,
            "customer deleted"
        );
        Ok(removed)
    }

    // =========================================================================
    // Transaction Operations
    // =========================================================================

    /// Transactions matching the filter, insertion order.
    #[must_use]
    pub fn list_transactions(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        self.read(|state| {
            state
                .transactions
                .iter()
                .filter(|t| filter.matches(t))
                .cloned()
                .collect()
        })
    }

    /// Look up one transaction.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` when the id is absent.
    pub fn get_transaction(&self, id: TransactionId) -> Result<Transaction> {
        self.read(|state| {
            state
                .transactions
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(LedgerError::TransactionNotFound { transaction_id: id })
        })
    }

    /// Create a transaction from caller input.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when a required field is missing, the type is not
    /// credit/debit, or the amount is out of range; `CustomerNotFound` when
    /// `customer_id` does not reference an existing customer. Nothing is
    /// appended on failure.
    pub async fn create_transaction(&self, input: TransactionInput) -> Result<Transaction> {
        let fields = input.validate()?;

        let transaction = self
            .mutate(|state| {
                state.customer(fields.customer_id)?;
                let transaction = Transaction::create(fields);
                state.transactions.push(transaction.clone());
                Ok(transaction)
            })
            .await?;

        tracing::info!(
            transaction_id = %transaction.id,
            customer_id = %transaction.customer_id,
            r#type = %transaction.transaction_type,
            amount = %transaction.amount,
            "transaction created"
        );
        Ok(transaction)
    }

    /// Replace a transaction's mutable fields.
    ///
    /// The payload is validated exactly like a create, `customer_id`
    /// included: it is required and must reference an existing customer.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` when the id is absent, plus every
    /// failure mode of [`Ledger::create_transaction`].
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        input: TransactionInput,
    ) -> Result<Transaction> {
        let fields = input.validate()?;

        let transaction = self
            .mutate(|state| {
                state.customer(fields.customer_id)?;
                let transaction = state.transaction_mut(id)?;
                transaction.apply_update(fields);
                Ok(transaction.clone())
            })
            .await?;

        tracing::info!(transaction_id = %id, "transaction updated");
        Ok(transaction)
    }

    /// Delete a transaction.
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` when the id is absent.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<()> {
        self.mutate(|state| {
            let index = state
                .transactions
                .iter()
                .position(|t| t.id == id)
                .ok_or(LedgerError::TransactionNotFound { transaction_id: id })?;
            state.transactions.remove(index);
            Ok(())
        })
        .await?;

        tracing::info!(transaction_id = %id, "transaction deleted");
        Ok(())
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Compute one customer's balance from their transactions.
    ///
    /// A pure sum over integer cents: deterministic and order-independent.
    ///
    /// # Errors
    ///
    /// Returns `CustomerNotFound` when the customer is absent.
    pub fn customer_balance(&self, id: CustomerId) -> Result<CustomerBalance> {
        self.read(|state| {
            let customer = state.customer(id)?;

            let mut total_credits = Amount::ZERO;
            let mut total_debits = Amount::ZERO;
            let mut transaction_count = 0;

            for transaction in state.transactions.iter().filter(|t| t.customer_id == id) {
                match transaction.transaction_type {
                    TransactionType::Credit => total_credits += transaction.amount,
                    TransactionType::Debit => total_debits += transaction.amount,
                }
                transaction_count += 1;
            }

            Ok(CustomerBalance {
                customer_id: id,
                customer_name: customer.name.clone(),
                balance: total_credits - total_debits,
                total_credits,
                total_debits,
                transaction_count,
            })
        })
    }

    /// Compute the dashboard aggregates.
    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.read(|state| {
            let mut total_credits = Amount::ZERO;
            let mut total_debits = Amount::ZERO;
            for transaction in &state.transactions {
                match transaction.transaction_type {
                    TransactionType::Credit => total_credits += transaction.amount,
                    TransactionType::Debit => total_debits += transaction.amount,
                }
            }

            // Stable sort keeps insertion order for equal dates.
            let mut recent: Vec<&Transaction> = state.transactions.iter().collect();
            recent.sort_by(|a, b| b.date.cmp(&a.date));

            let recent_transactions = recent
                .into_iter()
                .take(RECENT_TRANSACTIONS)
                .map(|transaction| RecentTransaction {
                    transaction: transaction.clone(),
                    customer_name: state
                        .customers
                        .iter()
                        .find(|c| c.id == transaction.customer_id)
                        .map_or_else(|| "Unknown".to_string(), |c| c.name.clone()),
                })
                .collect();

            DashboardStats {
                total_customers: state.customers.len(),
                total_transactions: state.transactions.len(),
                total_credits,
                total_debits,
                net_balance: total_credits - total_debits,
                recent_transactions,
            }
        })
    }

    // =========================================================================
    // Whole-Document Operations
    // =========================================================================

    /// Replace both collections with an externally supplied document.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when any transaction references a customer that
    /// is not part of the supplied document; the current state is untouched.
    pub async fn restore(
        &self,
        customers: Vec<Customer>,
        transactions: Vec<Transaction>,
    ) -> Result<(usize, usize)> {
        let counts = self
            .mutate(|state| {
                for transaction in &transactions {
                    if !customers.iter().any(|c| c.id == transaction.customer_id) {
                        return Err(LedgerError::validation(format!(
                            "transaction {} references unknown customer {}",
                            transaction.id, transaction.customer_id
                        )));
                    }
                }

                state.customers = customers;
                state.transactions = transactions;
                Ok((state.customers.len(), state.transactions.len()))
            })
            .await?;

        tracing::info!(
            customers = counts.0,
            transactions = counts.1,
            "ledger restored from supplied document"
        );
        Ok(counts)
    }
}
