//! Category set and eligibility rules
//!
//! Categories are plain names kept in insertion order without duplicates.
//! A handful of built-in names decide which categories are offered for
//! income: "Gifts" and "Other" qualify for both directions, while "Salary",
//! "Freelance" and "Business" are income-only. Custom categories are always
//! expense categories.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;
use crate::error::{TrackerError, TrackerResult};

/// Categories seeded on first use and restored by a reset
pub const DEFAULT_CATEGORIES: [&str; 13] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Salary",
    "Freelance",
    "Business",
    "Gifts",
    "Other",
];

/// Names offered when recording income
pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Business", "Gifts", "Other"];

/// Names never offered when recording an expense
pub const INCOME_ONLY_CATEGORIES: [&str; 3] = ["Salary", "Freelance", "Business"];

/// Whether `name` may classify a transaction of the given type
pub fn is_eligible(name: &str, kind: TransactionType) -> bool {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES.contains(&name),
        TransactionType::Expense => !INCOME_ONLY_CATEGORIES.contains(&name),
    }
}

/// Ordered, deduplicated list of category names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// An empty set (no built-ins)
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a new name, returning the trimmed form that was stored
    pub fn insert(&mut self, name: &str) -> TrackerResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        if self.contains(name) {
            return Err(TrackerError::DuplicateCategory(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(name.to_string())
    }

    /// Remove a name; returns whether it was present
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Categories offered for a transaction type, in set order
    ///
    /// With no type selected the full set is returned.
    pub fn for_type(&self, kind: Option<TransactionType>) -> Vec<String> {
        match kind {
            Some(kind) => self
                .names
                .iter()
                .filter(|name| is_eligible(name, kind))
                .cloned()
                .collect(),
            None => self.names.clone(),
        }
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<Vec<String>> for CategorySet {
    fn from(raw: Vec<String>) -> Self {
        let mut set = Self::empty();
        for name in raw {
            // Blank and repeated names in stored data are dropped
            let _ = set.insert(&name);
        }
        set
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.names
    }
}
