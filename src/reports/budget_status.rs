//! Spending against the monthly budget
//!
//! Only expenses dated in the calendar month of the reference day count.
//! There is no per-month history: the budget always applies to "this month".

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Money, Transaction};

/// Percentage above which spending is flagged as a warning
pub const WARNING_THRESHOLD: f64 = 75.0;
/// Percentage above which spending is flagged as critical
pub const CRITICAL_THRESHOLD: f64 = 90.0;

/// Display band for budget utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    Normal,
    Warning,
    Critical,
}

impl BudgetBand {
    /// Band for a (possibly unclamped) utilization percentage
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage > CRITICAL_THRESHOLD {
            Self::Critical
        } else if percentage > WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Spend-vs-budget for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub budget: Money,
    pub spent: Money,
    /// Negative once the budget is exceeded
    pub remaining: Money,
    /// Unclamped; above 100 when overspent, 0 when no budget is set
    pub percentage: f64,
    pub band: BudgetBand,
}

impl BudgetStatus {
    /// Evaluate `budget` against expenses in the month containing `today`
    pub fn compute(transactions: &[Transaction], budget: Money, today: NaiveDate) -> Self {
        let spent: Money = transactions
            .iter()
            .filter(|t| t.is_expense() && in_month(t.date, today))
            .map(|t| t.amount)
            .sum();

        let percentage = if budget.is_positive() {
            spent.cents() as f64 * 100.0 / budget.cents() as f64
        } else {
            0.0
        };

        Self {
            budget,
            spent,
            remaining: budget - spent,
            percentage,
            band: BudgetBand::for_percentage(percentage),
        }
    }

    /// Percentage clamped to 0..=100 for progress bars
    pub fn display_percentage(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    /// Whole-number percentage for labels
    pub fn rounded_percentage(&self) -> i64 {
        self.percentage.round() as i64
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

fn in_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionInput, TransactionType};
    use chrono::Utc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionType, cents: i64, date: NaiveDate) -> Transaction {
        let input = TransactionInput::new("item", Money::from_cents(cents), kind, "Other", date);
        Transaction::new(input.validate().unwrap(), Utc::now())
    }

    #[test]
    fn test_bands() {
        assert_eq!(BudgetBand::for_percentage(0.0), BudgetBand::Normal);
        assert_eq!(BudgetBand::for_percentage(75.0), BudgetBand::Normal);
        assert_eq!(BudgetBand::for_percentage(75.01), BudgetBand::Warning);
        assert_eq!(BudgetBand::for_percentage(90.0), BudgetBand::Warning);
        assert_eq!(BudgetBand::for_percentage(90.5), BudgetBand::Critical);
        assert_eq!(BudgetBand::for_percentage(250.0), BudgetBand::Critical);
    }

    #[test]
    fn test_only_current_month_expenses_count() {
        let today = day(2024, 3, 20);
        let transactions = vec![
            txn(TransactionType::Expense, 3_000, day(2024, 3, 1)),
            txn(TransactionType::Expense, 1_000, day(2024, 2, 29)),
            txn(TransactionType::Expense, 1_000, day(2023, 3, 5)),
            txn(TransactionType::Income, 50_000, day(2024, 3, 2)),
            txn(TransactionType::Expense, 500, day(2024, 3, 31)),
        ];

        let status = BudgetStatus::compute(&transactions, Money::from_cents(10_000), today);
        assert_eq!(status.spent, Money::from_cents(3_500));
        assert_eq!(status.remaining, Money::from_cents(6_500));
        assert_eq!(status.percentage, 35.0);
        assert_eq!(status.band, BudgetBand::Normal);
    }

    #[test]
    fn test_zero_budget_has_zero_percentage() {
        let today = day(2024, 3, 20);
        let transactions = vec![txn(TransactionType::Expense, 3_000, today)];
        let status = BudgetStatus::compute(&transactions, Money::zero(), today);
        assert_eq!(status.percentage, 0.0);
        assert_eq!(status.remaining, Money::from_cents(-3_000));
        assert_eq!(status.band, BudgetBand::Normal);
    }

    #[test]
    fn test_overspending_is_unclamped() {
        let today = day(2024, 3, 20);
        let transactions = vec![txn(TransactionType::Expense, 15_000, today)];
        let status = BudgetStatus::compute(&transactions, Money::from_cents(10_000), today);
        assert_eq!(status.percentage, 150.0);
        assert_eq!(status.display_percentage(), 100.0);
        assert_eq!(status.band, BudgetBand::Critical);
        assert!(status.is_over_budget());
    }
}
