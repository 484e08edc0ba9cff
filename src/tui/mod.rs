//! Terminal User Interface module
//!
//! An interactive dashboard over the ledger built with ratatui: summary
//! cards, a budget gauge, the transaction table and the category list,
//! plus modal dialogs for data entry and confirmations.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
