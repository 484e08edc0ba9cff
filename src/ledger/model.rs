//! The ledger: transactions, categories and the monthly budget
//!
//! `LedgerModel` owns its store and clock. Every mutating operation
//! validates first, writes the changed collection to the store and only then
//! swaps it into memory, so a failed write leaves both sides as they were.
//! The audit entry is appended after the commit; a failure there is kept as
//! a warning for the presenter instead of failing the operation.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::clock::Clock;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{ExportDocument, ExportSummary};
use crate::models::{CategorySet, Money, Transaction, TransactionId, TransactionInput, TransactionType};
use crate::reports::{BudgetStatus, Summary};
use crate::storage::{load_json, load_json_records, save_json, Store, BUDGET_KEY, CATEGORIES_KEY, TRANSACTIONS_KEY};

use super::filter::TransactionFilter;

use chrono::NaiveDate;

/// Personal finance ledger backed by a key-value store
pub struct LedgerModel<S: Store, C: Clock> {
    store: S,
    clock: C,
    audit: Option<AuditLogger>,
    /// Last audit write failure, waiting to be shown
    audit_warning: Option<String>,
    transactions: Vec<Transaction>,
    categories: CategorySet,
    monthly_budget: Money,
    current_edit_id: Option<TransactionId>,
}

impl<S: Store, C: Clock> LedgerModel<S, C> {
    /// Load the ledger from `store`
    ///
    /// Missing or unreadable documents fall back to their defaults: no
    /// transactions, the built-in categories and a zero budget. Individual
    /// transaction records that cannot be read are skipped.
    pub fn load(store: S, clock: C) -> Self {
        let transactions: Vec<Transaction> =
            load_json_records(&store, TRANSACTIONS_KEY).unwrap_or_default();
        let categories: CategorySet = load_json(&store, CATEGORIES_KEY).unwrap_or_default();
        let monthly_budget: Money = load_json(&store, BUDGET_KEY).unwrap_or_default();

        Self {
            store,
            clock,
            audit: None,
            audit_warning: None,
            transactions,
            categories,
            monthly_budget,
            current_edit_id: None,
        }
    }

    /// Record every mutation in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Take the pending audit failure message, if the last write failed
    pub fn take_audit_warning(&mut self) -> Option<String> {
        self.audit_warning.take()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn monthly_budget(&self) -> Money {
        self.monthly_budget
    }

    // === Transactions ===

    /// Validate and record a new transaction
    pub fn add_transaction(&mut self, input: &TransactionInput) -> TrackerResult<Transaction> {
        let details = input.validate()?;
        self.require_category(&details.category)?;

        let txn = Transaction::new(details, self.clock.now());
        let mut staged = self.transactions.clone();
        staged.push(txn.clone());
        self.commit_transactions(staged)?;

        self.log(AuditEntry::create(
            self.clock.now(),
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.description.clone()),
            &txn,
        ));

        Ok(txn)
    }

    /// Replace the editable fields of an existing transaction
    pub fn update_transaction(
        &mut self,
        id: &TransactionId,
        input: &TransactionInput,
    ) -> TrackerResult<Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let details = input.validate()?;
        self.require_category(&details.category)?;

        let mut staged = self.transactions.clone();
        let before = staged[index].clone();
        staged[index].apply(details);
        let after = staged[index].clone();
        self.commit_transactions(staged)?;

        if self.current_edit_id.as_ref() == Some(id) {
            self.current_edit_id = None;
        }

        self.log(AuditEntry::update(
            self.clock.now(),
            EntityType::Transaction,
            id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
        ));

        Ok(after)
    }

    /// Remove a transaction
    pub fn delete_transaction(&mut self, id: &TransactionId) -> TrackerResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        let mut staged = self.transactions.clone();
        let removed = staged.remove(index);
        self.commit_transactions(staged)?;

        if self.current_edit_id.as_ref() == Some(id) {
            self.current_edit_id = None;
        }

        self.log(AuditEntry::delete(
            self.clock.now(),
            EntityType::Transaction,
            id.to_string(),
            Some(removed.description.clone()),
            &removed,
        ));
        Ok(())
    }

    /// Transactions matching `filter`, newest date first
    ///
    /// Transactions on the same date keep their insertion order.
    pub fn list_transactions(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let mut result: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }

    pub fn get_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Look up a transaction by full id, display id (`txn-1a2b3c4d`) or id prefix
    pub fn find_transaction(&self, query: &str) -> TrackerResult<&Transaction> {
        if let Ok(id) = query.trim().parse::<TransactionId>() {
            return self
                .get_transaction(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(query.trim()));
        }

        let mut matches = self.transactions.iter().filter(|t| t.id.matches_prefix(query));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (None, _) => Err(TrackerError::transaction_not_found(query.trim())),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "'{}' matches more than one transaction; use a longer id",
                query.trim()
            ))),
        }
    }

    // === Edit session ===

    /// Start editing a transaction, returning its current state
    pub fn edit_transaction(&mut self, id: &TransactionId) -> TrackerResult<Transaction> {
        let txn = self
            .get_transaction(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
        self.current_edit_id = Some(id.clone());
        Ok(txn)
    }

    /// Abandon the current edit, if any
    pub fn close_edit(&mut self) {
        self.current_edit_id = None;
    }

    pub fn current_edit_id(&self) -> Option<&TransactionId> {
        self.current_edit_id.as_ref()
    }

    // === Categories ===

    /// Append a category name
    pub fn add_category(&mut self, name: &str) -> TrackerResult<String> {
        let mut staged = self.categories.clone();
        let name = staged.insert(name)?;
        self.commit_categories(staged)?;

        self.log(AuditEntry::create(
            self.clock.now(),
            EntityType::Category,
            name.clone(),
            None,
            &name,
        ));

        Ok(name)
    }

    /// Remove a category name; transactions that use it are left untouched
    ///
    /// Returns whether the name was present.
    pub fn delete_category(&mut self, name: &str) -> TrackerResult<bool> {
        let mut staged = self.categories.clone();
        if !staged.remove(name) {
            return Ok(false);
        }
        self.commit_categories(staged)?;

        self.log(AuditEntry::delete(
            self.clock.now(),
            EntityType::Category,
            name,
            None,
            &name,
        ));

        Ok(true)
    }

    /// Categories eligible for a transaction type; all of them for `None`
    pub fn categories_for_type(&self, kind: Option<TransactionType>) -> Vec<String> {
        self.categories.for_type(kind)
    }

    // === Budget ===

    /// Set the monthly spending budget
    pub fn set_budget(&mut self, amount: Option<Money>) -> TrackerResult<()> {
        let amount = match amount {
            Some(amount) if amount.is_positive() => amount,
            _ => return Err(TrackerError::InvalidBudgetAmount),
        };

        let before = self.monthly_budget;
        save_json(&mut self.store, BUDGET_KEY, &amount)?;
        self.monthly_budget = amount;

        self.log(AuditEntry::update(
            self.clock.now(),
            EntityType::Budget,
            BUDGET_KEY,
            None,
            &before,
            &amount,
        ));
        Ok(())
    }

    // === Derived values ===

    pub fn compute_summary(&self) -> Summary {
        Summary::from_transactions(&self.transactions)
    }

    /// Budget utilization for the calendar month containing `now`
    pub fn compute_budget_status(&self, now: NaiveDate) -> BudgetStatus {
        BudgetStatus::compute(&self.transactions, self.monthly_budget, now)
    }

    /// Budget utilization for the clock's current month
    pub fn current_budget_status(&self) -> BudgetStatus {
        self.compute_budget_status(self.clock.today())
    }

    // === Export / reset ===

    /// Snapshot of the whole ledger, stamped with the current time
    pub fn export_snapshot(&self) -> ExportDocument {
        let summary = self.compute_summary();
        ExportDocument {
            transactions: self.transactions.clone(),
            categories: self.categories.names().to_vec(),
            monthly_budget: self.monthly_budget,
            export_date: self.clock.now(),
            summary: ExportSummary::new(&summary, self.transactions.len()),
        }
    }

    /// Wipe the store and return to the default state
    pub fn reset_all(&mut self) -> TrackerResult<()> {
        let dropped = serde_json::json!({
            "transactions": self.transactions.len(),
            "categories": self.categories.len(),
            "monthlyBudget": self.monthly_budget,
        });

        self.store.clear()?;

        // An empty store already loads as the defaults
        self.transactions.clear();
        self.categories = CategorySet::default();
        self.monthly_budget = Money::zero();
        self.current_edit_id = None;

        save_json(&mut self.store, TRANSACTIONS_KEY, &self.transactions)?;
        save_json(&mut self.store, CATEGORIES_KEY, &self.categories)?;
        save_json(&mut self.store, BUDGET_KEY, &self.monthly_budget)?;

        self.log(AuditEntry::reset(self.clock.now(), dropped));
        Ok(())
    }

    fn require_category(&self, name: &str) -> TrackerResult<()> {
        if self.categories.contains(name) {
            Ok(())
        } else {
            Err(TrackerError::UnknownCategory(name.to_string()))
        }
    }

    fn position(&self, id: &TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| &t.id == id)
    }

    fn commit_transactions(&mut self, staged: Vec<Transaction>) -> TrackerResult<()> {
        save_json(&mut self.store, TRANSACTIONS_KEY, &staged)?;
        self.transactions = staged;
        Ok(())
    }

    fn commit_categories(&mut self, staged: CategorySet) -> TrackerResult<()> {
        save_json(&mut self.store, CATEGORIES_KEY, &staged)?;
        self.categories = staged;
        Ok(())
    }

    fn log(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                self.audit_warning = Some(format!("audit log not updated: {}", e));
            }
        }
    }
}
