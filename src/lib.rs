//! Expense Tracker - personal income/expense ledger with a monthly budget
//!
//! Transactions, categories and a monthly spending limit are persisted as
//! JSON values in a small key-value store. The same ledger is driven by a
//! command-line interface and by an interactive terminal dashboard.
//!
//! # Architecture
//!
//! - `config`: Data directory and user settings
//! - `error`: Custom error types
//! - `models`: Money, transactions and categories
//! - `storage`: Key-value persistence (file-backed and in-memory)
//! - `ledger`: The ledger model that owns all state and mutations
//! - `reports`: Summary totals and monthly budget status
//! - `audit`: JSONL audit log of every mutation
//! - `export`: JSON / YAML / CSV snapshots
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: ratatui dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::clock::SystemClock;
//! use expense_tracker::ledger::LedgerModel;
//! use expense_tracker::storage::FileStore;
//!
//! let store = FileStore::open("/tmp/expenses")?;
//! let ledger = LedgerModel::load(store, SystemClock);
//! println!("{:?}", ledger.compute_summary());
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
