//! Configuration module for the expense tracker
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{ExportFormat, Settings};
