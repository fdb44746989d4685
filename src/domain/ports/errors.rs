use thiserror::Error;

/// Key-value store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    #[error("Quota exceeded writing '{key}': {size} bytes exceeds limit of {quota} bytes")]
    QuotaExceeded { key: String, size: u64, quota: u64 },

    #[error("Invalid key '{0}': keys must be non-empty and contain only [A-Za-z0-9._-]")]
    InvalidKey(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}
