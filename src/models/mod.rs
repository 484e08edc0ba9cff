//! Core data models for the expense tracker
//!
//! Transactions, category sets, money amounts and ids.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{
    is_eligible, CategorySet, DEFAULT_CATEGORIES, INCOME_CATEGORIES, INCOME_ONLY_CATEGORIES,
};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionDetails, TransactionInput, TransactionType};
