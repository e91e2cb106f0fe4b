//! File-based Key-Value Store Adapter
//!
//! Stores each key as one file under a data directory. This is the
//! durable "local storage" for the contour document and theme flag.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{KeyValueError, KeyValueStore};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new file store rooted at a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a key
    fn key_path(&self, key: &str) -> Result<PathBuf, KeyValueError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(KeyValueError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(key))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), KeyValueError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| KeyValueError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError> {
        let file_path = self.key_path(key)?;

        if !file_path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&file_path)
            .await
            .map_err(|e| KeyValueError::IoError(e.to_string()))?;

        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError> {
        let file_path = self.key_path(key)?;
        self.ensure_dir().await?;

        fs::write(&file_path, value)
            .await
            .map_err(|e| KeyValueError::IoError(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueError> {
        let file_path = self.key_path(key)?;

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| KeyValueError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}
