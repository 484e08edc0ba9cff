//! `expense history`: recent entries from the audit log

use crate::audit::AuditLogger;
use crate::error::TrackerResult;

/// Print the most recent audit entries, newest last
pub fn handle_history(logger: &AuditLogger, limit: usize) -> TrackerResult<()> {
    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
