//! Custom error types for the expense tracker
//!
//! Validation failures are ordinary values so presenters can turn them into
//! user-facing messages; nothing here is fatal to the process.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A required input field was empty or absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Transaction amounts must be strictly positive
    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    /// Category names cannot be blank
    #[error("Category name cannot be empty")]
    EmptyName,

    /// Category names are unique (exact, case-sensitive match)
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// The category is not part of the current category set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed field values (unparseable types, dates, amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Monthly budget must be present and positive
    #[error("Please enter a valid budget amount")]
    InvalidBudgetAmount,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::NonPositiveAmount
                | Self::EmptyName
                | Self::DuplicateCategory(_)
                | Self::UnknownCategory(_)
                | Self::InvalidBudgetAmount
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
