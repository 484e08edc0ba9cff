//! Ledger bookkeeping: the model and its list filters

pub mod filter;
pub mod model;

pub use filter::TransactionFilter;
pub use model::LedgerModel;
