//! CLI command for data export

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::clock::Clock;
use crate::config::{ExportFormat, Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{backup_file_name, write_json, write_transactions_csv, write_yaml};
use crate::ledger::LedgerModel;
use crate::storage::file_io::write_text_atomic;
use crate::storage::Store;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
    /// CSV format (transactions only)
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Yaml => ExportFormat::Yaml,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

/// Arguments for `expense export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; defaults to a dated file in the backups directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Handle `expense export`
pub fn handle_export<S: Store, C: Clock>(
    ledger: &LedgerModel<S, C>,
    paths: &TrackerPaths,
    settings: &Settings,
    args: ExportArgs,
) -> TrackerResult<()> {
    let format = args
        .format
        .map(ExportFormat::from)
        .unwrap_or(settings.default_export_format);

    let output = match args.output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths
                .backup_dir()
                .join(backup_file_name(ledger.clock().today(), format))
        }
    };

    // Serialize fully before touching the target file
    let doc = ledger.export_snapshot();
    let mut buffer = Vec::new();
    match format {
        ExportFormat::Json => write_json(&doc, &mut buffer, true)?,
        ExportFormat::Yaml => write_yaml(&doc, &mut buffer)?,
        ExportFormat::Csv => {
            write_transactions_csv(&doc.transactions, &mut buffer)?;
        }
    }
    let text = String::from_utf8(buffer)
        .map_err(|e| TrackerError::Export(format!("Export is not valid UTF-8: {}", e)))?;

    write_text_atomic(&output, &text).map_err(|e| {
        TrackerError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    println!("Data exported successfully!");
    println!("  File:         {}", output.display());
    println!("  Format:       {}", format.extension());
    println!("  Transactions: {}", doc.summary.transaction_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_lands_in_backups() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ledger = LedgerModel::load(
            MemoryStore::new(),
            FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        );

        handle_export(
            &ledger,
            &paths,
            &Settings::default(),
            ExportArgs {
                output: None,
                format: None,
            },
        )
        .unwrap();

        let expected = paths.backup_dir().join("expense-tracker-backup-2024-03-01.json");
        let text = std::fs::read_to_string(expected).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["summary"]["transactionCount"], 0);
        assert_eq!(value["categories"].as_array().unwrap().len(), 13);
    }

    #[test]
    fn test_explicit_csv_output() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ledger = LedgerModel::load(
            MemoryStore::new(),
            FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        );
        let output = temp_dir.path().join("out.csv");

        handle_export(
            &ledger,
            &paths,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: Some(FormatArg::Csv),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.starts_with("id,date,type"));
    }

    #[test]
    fn test_export_replaces_existing_file_whole() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ledger = LedgerModel::load(
            MemoryStore::new(),
            FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        );
        let output = temp_dir.path().join("ledger.json");
        std::fs::write(&output, "x".repeat(100_000)).unwrap();

        handle_export(
            &ledger,
            &paths,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: Some(FormatArg::Json),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["monthlyBudget"], 0);

        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_failed_export_keeps_target() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ledger = LedgerModel::load(
            MemoryStore::new(),
            FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        );
        // The target is a non-empty directory, so the final rename fails
        let output = temp_dir.path().join("occupied");
        std::fs::create_dir(&output).unwrap();
        std::fs::write(output.join("keep.txt"), "keep").unwrap();

        let err = handle_export(
            &ledger,
            &paths,
            &Settings::default(),
            ExportArgs {
                output: Some(output.clone()),
                format: Some(FormatArg::Json),
            },
        )
        .unwrap_err();

        assert!(matches!(err, TrackerError::Export(_)));
        assert_eq!(std::fs::read_to_string(output.join("keep.txt")).unwrap(), "keep");
    }
}
