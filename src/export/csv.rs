//! CSV export of the transaction list (spreadsheet-friendly)

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 7] = [
    "id",
    "date",
    "type",
    "category",
    "description",
    "amount",
    "created_at",
];

/// Write transactions as CSV rows; returns the number of rows written
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| TrackerError::Export(e.to_string());

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.canonical(),
                txn.date.to_string(),
                txn.kind.as_str().to_string(),
                txn.category.clone(),
                txn.description.clone(),
                format!("{:.2}", txn.amount.to_decimal()),
                txn.created_at.to_rfc3339(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(transactions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionInput, TransactionType};
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_csv_rows_and_quoting() {
        let input = TransactionInput::new(
            "Dinner, with friends",
            Money::from_cents(4_250),
            TransactionType::Expense,
            "Food & Dining",
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        );
        let txn = Transaction::new(input.validate().unwrap(), Utc::now());

        let mut out = Vec::new();
        let count = write_transactions_csv(&[txn], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(count, 1);
        assert_eq!(lines[0], "id,date,type,category,description,amount,created_at");
        assert!(lines[1].contains(",2024-03-02,expense,Food & Dining,\"Dinner, with friends\",42.50,"));
    }
}
