//! CLI command implementations.

pub mod init;
pub mod task;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::domain::ports::KeyValueStore;
use crate::infrastructure::storage::open_store;
use crate::services::TaskService;

/// Open the configured store and load the task list from it.
pub async fn open_service(config: &Config) -> Result<TaskService<dyn KeyValueStore>> {
    let store = open_store(&config.storage)
        .await
        .context("Failed to open task storage")?;
    Ok(TaskService::open(store, config.storage.key.clone()).await)
}
