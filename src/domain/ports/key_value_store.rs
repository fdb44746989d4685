use crate::domain::ports::errors::StorageError;
use async_trait::async_trait;

/// String-keyed text store the task list is persisted to.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reject keys that cannot be used as file names or are empty.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Enforce an optional per-value size limit.
pub fn check_quota(key: &str, value: &str, quota: Option<u64>) -> Result<(), StorageError> {
    let size = value.len() as u64;
    match quota {
        Some(quota) if size > quota => Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            size,
            quota,
        }),
        _ => Ok(()),
    }
}
