//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger. Confirmation prompts
//! live here; the ledger itself never asks.

pub mod budget;
pub mod category;
pub mod export;
pub mod history;
pub mod parse;
pub mod prompt;
pub mod reset;
pub mod transaction;

pub use budget::{handle_budget_command, handle_summary, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export, ExportArgs};
pub use history::handle_history;
pub use reset::handle_reset;
pub use transaction::{
    handle_add, handle_delete, handle_edit, handle_list, AddArgs, DeleteArgs, EditArgs, ListArgs,
};
