//! Transaction display formatting
//!
//! The list view is rendered with `tabled`; single records use a
//! label/value layout.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str, date_format: &str) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.format(date_format).to_string(),
            description: truncate(&txn.description, 32),
            category: txn.category.clone(),
            amount: format_signed_amount(txn, symbol),
        }
    }
}

/// Amount prefixed with `+` for income and `-` for expenses
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol))
}

/// Format a list of transactions as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions
        .iter()
        .map(|txn| TransactionRow::new(txn, symbol, date_format));

    Table::new(rows)
        .with(Style::sharp())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()))
        .to_string()
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(txn, symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Shorten a string to at most `max_len` characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionInput, TransactionType};
    use chrono::{NaiveDate, Utc};

    fn sample(kind: TransactionType, category: &str) -> Transaction {
        let input = TransactionInput::new(
            "Coffee",
            Money::from_cents(450),
            kind,
            category,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        );
        Transaction::new(input.validate().unwrap(), Utc::now())
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_transaction_table(&[], "$", "%Y-%m-%d"),
            "No transactions found."
        );
    }

    #[test]
    fn test_table_contains_rows() {
        let expense = sample(TransactionType::Expense, "Food & Dining");
        let income = sample(TransactionType::Income, "Gifts");
        let table = format_transaction_table(&[expense.clone(), income], "$", "%b %d, %Y");

        assert!(table.contains("Description"));
        assert!(table.contains(&expense.id.to_string()));
        assert!(table.contains("Mar 01, 2024"));
        assert!(table.contains("-$4.50"));
        assert!(table.contains("+$4.50"));
    }

    #[test]
    fn test_details() {
        let txn = sample(TransactionType::Expense, "Food & Dining");
        let details = format_transaction_details(&txn, "€", "%Y-%m-%d");
        assert!(details.contains("Amount:      -€4.50"));
        assert!(details.contains("Type:        Expense"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer description", 10), "a much ...");
    }
}
