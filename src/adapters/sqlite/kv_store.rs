//! SQLite-backed key-value store.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::ports::{check_quota, validate_key, KeyValueStore, StorageError};

pub struct SqliteKeyValueStore {
    pool: SqlitePool,
    quota_bytes: Option<u64>,
}

impl SqliteKeyValueStore {
    /// Wrap a pool whose schema has been migrated.
    pub fn new(pool: SqlitePool, quota_bytes: Option<u64>) -> Self {
        Self { pool, quota_bytes }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_entries WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        check_quota(key, value, self.quota_bytes)?;
        sqlx::query(
            r"INSERT INTO kv_entries (key, value, updated_at)
               VALUES (?, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
               ON CONFLICT(key) DO UPDATE SET
                   value = excluded.value,
                   updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        sqlx::query("DELETE FROM kv_entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
