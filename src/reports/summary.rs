//! Income/expense totals over the whole ledger

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, TransactionType};

/// Aggregate totals over all transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub balance: Money,
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_for = |kind: TransactionType| -> Money {
            transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };

        let total_income = total_for(TransactionType::Income);
        let total_expenses = total_for(TransactionType::Expense);

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;
    use chrono::{NaiveDate, Utc};

    fn txn(kind: TransactionType, cents: i64) -> Transaction {
        let category = match kind {
            TransactionType::Income => "Salary",
            TransactionType::Expense => "Shopping",
        };
        let input = TransactionInput::new(
            "item",
            Money::from_cents(cents),
            kind,
            category,
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        Transaction::new(input.validate().unwrap(), Utc::now())
    }

    #[test]
    fn test_empty_ledger_is_all_zero() {
        assert_eq!(Summary::from_transactions(&[]), Summary::default());
    }

    #[test]
    fn test_totals_and_balance() {
        let transactions = vec![
            txn(TransactionType::Income, 250_000),
            txn(TransactionType::Expense, 450),
            txn(TransactionType::Expense, 12_000),
            txn(TransactionType::Income, 5_000),
        ];

        let summary = Summary::from_transactions(&transactions);
        assert_eq!(summary.total_income, Money::from_cents(255_000));
        assert_eq!(summary.total_expenses, Money::from_cents(12_450));
        assert_eq!(summary.balance, summary.total_income - summary.total_expenses);
    }

    #[test]
    fn test_negative_balance() {
        let summary = Summary::from_transactions(&[txn(TransactionType::Expense, 450)]);
        assert_eq!(summary.balance, Money::from_cents(-450));
    }
}
