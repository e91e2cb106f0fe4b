//! Key-Value Store Port - Interface for string-keyed document storage.
//!
//! Two independent stores with different lifetimes use this port:
//! a durable store for the contour document and theme flag, and a
//! session-scoped store for the advice cache.

use async_trait::async_trait;

/// Errors that can occur during key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum KeyValueError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing whole string values by key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if nothing is stored under the key
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueError>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueError>;

    /// Remove the value stored under `key` (no-op if absent)
    async fn remove(&self, key: &str) -> Result<(), KeyValueError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_error_invalid_key() {
        let err = KeyValueError::InvalidKey("../etc".to_string());
        assert!(err.to_string().contains("Invalid storage key"));
    }

    #[test]
    fn key_value_error_io() {
        let err = KeyValueError::IoError("disk full".to_string());
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
