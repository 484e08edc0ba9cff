//! Audit logging for the expense tracker
//!
//! Every mutation of the ledger (transactions, categories, budget, resets)
//! is appended to `audit.log` as one JSON line with before/after values.
//! This log is the application's record of what happened and when.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(now, EntityType::Category, "Pets", None, &"Pets"))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
