//! Directory-backed key-value store
//!
//! Each key is stored as `<dir>/<key>.json`, written atomically.

use std::fs;
use std::path::{Path, PathBuf};

use super::file_io::{read_text, write_text_atomic};
use super::Store;
use crate::error::{TrackerError, TrackerResult};

/// Store that keeps one JSON document per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> TrackerResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            TrackerError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document holding `key`
    pub fn key_path(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TrackerError::Storage(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        read_text(self.key_path(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        write_text_atomic(self.key_path(key)?, value)
    }

    fn clear(&mut self) -> TrackerResult<()> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(TrackerError::Storage(format!(
                    "Failed to list {}: {}",
                    self.dir.display(),
                    e
                )))
            }
        };

        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path).map_err(|e| {
                    TrackerError::Storage(format!("Failed to remove {}: {}", path.display(), e))
                })?;
            }
        }

        Ok(())
    }
}
