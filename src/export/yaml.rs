//! YAML export, a human-readable variant of the JSON backup

use std::io::Write;

use super::document::ExportDocument;
use crate::error::{TrackerError, TrackerResult};

/// Write the export document as commented YAML
pub fn write_yaml<W: Write>(doc: &ExportDocument, mut writer: W) -> TrackerResult<()> {
    let header = format!(
        "# Expense Tracker backup\n# Generated: {}\n# Transactions: {}\n\n",
        doc.export_date.to_rfc3339(),
        doc.summary.transaction_count
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, doc).map_err(|e| TrackerError::Export(e.to_string()))
}
