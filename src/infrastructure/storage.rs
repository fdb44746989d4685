//! Opens the key-value store selected by configuration.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::sqlite::{database_url, initialize_database};
use crate::adapters::{FileKeyValueStore, InMemoryKeyValueStore, SqliteKeyValueStore};
use crate::domain::models::config::{StorageBackend, StorageConfig};
use crate::domain::ports::{KeyValueStore, StorageError};

/// Open the configured backend.
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StorageError> {
    debug!(backend = config.backend.as_str(), path = %config.path, "opening store");
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => {
            Arc::new(FileKeyValueStore::open(&config.path, config.quota_bytes).await?)
        }
        StorageBackend::Sqlite => {
            let pool = initialize_database(&database_url(&config.path)).await?;
            Arc::new(SqliteKeyValueStore::new(pool, config.quota_bytes))
        }
        StorageBackend::Memory => Arc::new(match config.quota_bytes {
            Some(quota) => InMemoryKeyValueStore::with_quota(quota),
            None => InMemoryKeyValueStore::new(),
        }),
    };
    Ok(store)
}
