//! Transaction list filtering

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionType};

/// Criteria for listing transactions
///
/// Every criterion is optional and they combine with AND. Date bounds are
/// inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    /// No criteria, matches everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn of_type(kind: TransactionType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if txn.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if txn.date > to {
                return false;
            }
        }
        true
    }
}
