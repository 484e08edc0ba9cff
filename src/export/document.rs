//! Point-in-time snapshot of the whole ledger

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ExportFormat;
use crate::models::{Money, Transaction};
use crate::reports::Summary;

/// Prefix of backup file names
pub const BACKUP_FILE_PREFIX: &str = "expense-tracker-backup";

/// Full ledger dump written by `expense export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<String>,
    pub monthly_budget: Money,
    pub export_date: DateTime<Utc>,
    pub summary: ExportSummary,
}

/// Totals included with an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub transaction_count: usize,
}

impl ExportSummary {
    pub fn new(summary: &Summary, transaction_count: usize) -> Self {
        Self {
            total_income: summary.total_income,
            total_expenses: summary.total_expenses,
            transaction_count,
        }
    }
}

/// File name for a backup taken on `date`, e.g. `expense-tracker-backup-2024-03-01.json`
pub fn backup_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        BACKUP_FILE_PREFIX,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            backup_file_name(date, ExportFormat::Json),
            "expense-tracker-backup-2024-03-01.json"
        );
        assert_eq!(
            backup_file_name(date, ExportFormat::Yaml),
            "expense-tracker-backup-2024-03-01.yaml"
        );
    }
}
