//! Derived figures: ledger totals and monthly budget utilization

pub mod budget_status;
pub mod summary;

pub use budget_status::{BudgetBand, BudgetStatus};
pub use summary::Summary;
