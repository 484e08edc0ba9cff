//! Export module for the expense tracker
//!
//! - JSON: full ledger backup (the canonical format)
//! - YAML: the same document, human-readable
//! - CSV: the transaction list only

pub mod csv;
pub mod document;
pub mod json;
pub mod yaml;

pub use self::csv::write_transactions_csv;
pub use document::{backup_file_name, ExportDocument, ExportSummary, BACKUP_FILE_PREFIX};
pub use json::write_json;
pub use yaml::write_yaml;
