//! `expense reset`: wipe the ledger back to defaults

use super::prompt::confirm;
use crate::clock::Clock;
use crate::error::TrackerResult;
use crate::ledger::LedgerModel;
use crate::storage::Store;

const FIRST_PROMPT: &str = "Are you sure you want to clear all data? This action cannot be undone.";
const SECOND_PROMPT: &str =
    "This will delete all transactions, categories, and budget settings. Are you absolutely sure?";

/// Handle `expense reset`; asks twice unless `yes` is set
pub fn handle_reset<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    yes: bool,
) -> TrackerResult<()> {
    if !yes && !(confirm(FIRST_PROMPT)? && confirm(SECOND_PROMPT)?) {
        println!("Cancelled. No data was changed.");
        return Ok(());
    }

    ledger.reset_all()?;
    println!("All data cleared successfully!");
    Ok(())
}
