//! Modal dialogs

pub mod confirm;
pub mod help;
pub mod prompt;
pub mod transaction;
