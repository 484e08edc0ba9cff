//! JSON export

use std::io::Write;

use super::document::ExportDocument;
use crate::error::{TrackerError, TrackerResult};

/// Write the export document as JSON
pub fn write_json<W: Write>(doc: &ExportDocument, writer: W, pretty: bool) -> TrackerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, doc)
    } else {
        serde_json::to_writer(writer, doc)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::document::ExportSummary;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    fn empty_doc() -> ExportDocument {
        ExportDocument {
            transactions: Vec::new(),
            categories: vec!["Travel".into()],
            monthly_budget: Money::from_cents(50_000),
            export_date: Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(),
            summary: ExportSummary {
                total_income: Money::zero(),
                total_expenses: Money::zero(),
                transaction_count: 0,
            },
        }
    }

    #[test]
    fn test_field_names() {
        let mut out = Vec::new();
        write_json(&empty_doc(), &mut out, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["monthlyBudget"], 500);
        assert_eq!(value["categories"][0], "Travel");
        assert_eq!(value["exportDate"], "2024-03-01T10:00:00Z");
        assert_eq!(value["summary"]["transactionCount"], 0);
        assert!(value["transactions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let mut out = Vec::new();
        write_json(&empty_doc(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"categories\""));
    }
}
