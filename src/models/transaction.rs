//! Transaction model
//!
//! A transaction is a single income or expense event. Amounts are always
//! stored positive; the direction comes from [`TransactionType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Sign applied when showing the amount (`+` income, `-` expense)
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            "" => Err(TrackerError::MissingField("type")),
            other => Err(TrackerError::Validation(format!(
                "Unknown transaction type '{}' (expected income or expense)",
                other
            ))),
        }
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction from validated details
    pub fn new(details: TransactionDetails, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            description: details.description,
            amount: details.amount,
            kind: details.kind,
            category: details.category,
            date: details.date,
            created_at,
        }
    }

    /// Replace every mutable field; `id` and `created_at` are kept
    pub fn apply(&mut self, details: TransactionDetails) {
        self.description = details.description;
        self.amount = details.amount;
        self.kind = details.kind;
        self.category = details.category;
        self.date = details.date;
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign implied by the transaction type
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Raw field values collected from a form or the command line
///
/// Every field may be blank; [`TransactionInput::validate`] turns it into
/// [`TransactionDetails`] or reports the first problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionInput {
    pub description: String,
    pub amount: Option<Money>,
    pub kind: Option<TransactionType>,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl TransactionInput {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            kind: Some(kind),
            category: category.into(),
            date: Some(date),
        }
    }

    /// Pre-fill the input from an existing transaction (edit forms)
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: Some(txn.amount),
            kind: Some(txn.kind),
            category: txn.category.clone(),
            date: Some(txn.date),
        }
    }

    /// Check presence of every field, then the amount's sign
    pub fn validate(&self) -> TrackerResult<TransactionDetails> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(TrackerError::MissingField("description"));
        }
        let amount = self.amount.ok_or(TrackerError::MissingField("amount"))?;
        let kind = self.kind.ok_or(TrackerError::MissingField("type"))?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(TrackerError::MissingField("category"));
        }
        let date = self.date.ok_or(TrackerError::MissingField("date"))?;

        if !amount.is_positive() {
            return Err(TrackerError::NonPositiveAmount);
        }

        Ok(TransactionDetails {
            description: description.to_string(),
            amount,
            kind,
            category: category.to_string(),
            date,
        })
    }
}

/// Validated mutable fields of a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub category: String,
    pub date: NaiveDate,
}
