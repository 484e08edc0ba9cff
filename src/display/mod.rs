//! Display formatting for CLI output

pub mod category;
pub mod summary;
pub mod transaction;

pub use category::format_category_list;
pub use summary::{format_bar, format_budget_status, format_summary};
pub use transaction::{format_signed_amount, format_transaction_details, format_transaction_table};
