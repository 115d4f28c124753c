//! File-backed key-value store
//!
//! One JSON file per key inside the storage directory.

use std::fs;
use std::path::{Path, PathBuf};

use promptcraft::{DomainError, KeyValueStore};

pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, DomainError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DomainError::Validation(format!("Invalid storage key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| DomainError::Storage(format!("Failed to read {:?}: {e}", path)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        tracing::debug!("Writing {:?}", path);
        fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Storage(format!("Failed to create {:?}: {e}", self.dir)))?;
        fs::write(&path, value)
            .map_err(|e| DomainError::Storage(format!("Failed to write {:?}: {e}", path)))
    }

    fn remove(&mut self, key: &str) -> Result<(), DomainError> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| DomainError::Storage(format!("Failed to remove {:?}: {e}", path)))?;
        }
        Ok(())
    }
}
