//! Storage layer for the expense tracker
//!
//! Persistence is a string-keyed key-value store. The ledger keeps three
//! keys, each holding a JSON document, and rewrites a key in full whenever
//! the corresponding collection changes.

pub mod file_io;
pub mod file_store;

pub use file_store::FileStore;

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Key holding the JSON array of transactions
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the JSON array of category names
pub const CATEGORIES_KEY: &str = "categories";
/// Key holding the monthly budget as a JSON number
pub const BUDGET_KEY: &str = "monthlyBudget";

/// A persistent string-keyed key-value map
pub trait Store {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;

    /// Remove every key at once
    fn clear(&mut self) -> TrackerResult<()>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }

    fn clear(&mut self) -> TrackerResult<()> {
        (**self).clear()
    }
}

/// In-process store, used for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> TrackerResult<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Load and decode a JSON value, treating anything unreadable as absent
///
/// Missing keys, store read failures and malformed documents all yield
/// `None`, so the caller substitutes its default.
pub fn load_json<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let raw = store.get(key).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

/// Load a JSON array, keeping each element that decodes
///
/// A record that does not fit `T` is skipped rather than discarding the
/// rest of the list. A document that is not an array yields `None`.
pub fn load_json_records<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<Vec<T>> {
    let values: Vec<serde_json::Value> = load_json(store, key)?;
    Some(
        values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect(),
    )
}

/// Encode `value` as JSON and store it under `key`
pub fn save_json<T: Serialize + ?Sized>(store: &mut dyn Store, key: &str, value: &T) -> TrackerResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basics() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_json_treats_garbage_as_absent() {
        let mut store = MemoryStore::new();
        store.set(BUDGET_KEY, "not a number").unwrap();
        assert_eq!(load_json::<f64>(&store, BUDGET_KEY), None);
        assert_eq!(load_json::<f64>(&store, "missing"), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_json(&mut store, CATEGORIES_KEY, &vec!["Rent", "Food"]).unwrap();
        let names: Vec<String> = load_json(&store, CATEGORIES_KEY).unwrap();
        assert_eq!(names, vec!["Rent", "Food"]);
    }

    #[test]
    fn test_load_json_records_skips_bad_elements() {
        let mut store = MemoryStore::new();
        store.set("nums", "[1, \"two\", 3]").unwrap();
        let nums: Vec<i32> = load_json_records(&store, "nums").unwrap();
        assert_eq!(nums, vec![1, 3]);

        store.set("nums", "{\"a\": 1}").unwrap();
        assert!(load_json_records::<i32>(&store, "nums").is_none());
        assert!(load_json_records::<i32>(&store, "missing").is_none());
    }
}
