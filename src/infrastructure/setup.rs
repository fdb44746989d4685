//! Project initialization: configuration directory and default config file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# taskdeck configuration
# Override settings by editing this file, adding .taskdeck/local.yaml,
# or setting environment variables with the TASKDECK_ prefix
#
# Example environment variables:
#   export TASKDECK_STORAGE__BACKEND=sqlite
#   export TASKDECK_STORAGE__PATH=.taskdeck/tasks.db
#   export TASKDECK_LOGGING__LEVEL=debug

# Task storage
storage:
  # Backend: file (one JSON file per key), sqlite, memory
  backend: "file"

  # Directory for the file backend, database file for sqlite
  path: ".taskdeck/store"

  # Key the task list is stored under
  key: "task-manager-tasks"

  # Optional maximum size of the stored list in bytes
  # quota_bytes: 5242880

# Logging configuration
logging:
  # Log level: trace, debug, info, warn, error
  level: "warn"

  # Log format: json, pretty
  format: "pretty"

  # Optional directory for rolling JSON log files
  # log_dir: ".taskdeck/logs"

  # Rotation for file output: daily, hourly, never
  rotation: "daily"
"#;

/// Paths used by a taskdeck project
#[derive(Debug, Clone)]
pub struct SetupPaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl SetupPaths {
    /// Setup paths rooted at `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_dir = root.join(".taskdeck");
        Self {
            config_file: config_dir.join("config.yaml"),
            config_dir,
            root,
        }
    }

    /// Setup paths for the current directory
    pub fn current() -> Result<Self> {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(current_dir))
    }

    /// Check if the project is already initialized
    pub fn is_initialized(&self) -> bool {
        self.config_file.exists()
    }
}

/// Create the configuration directory and default config file.
///
/// Returns `false` when the project was already initialized and `force`
/// was not set; an existing task store is never touched.
pub async fn initialize_project(paths: &SetupPaths, force: bool) -> Result<bool> {
    if paths.is_initialized() && !force {
        return Ok(false);
    }

    fs::create_dir_all(&paths.config_dir)
        .await
        .context("Failed to create config directory")?;

    fs::write(&paths.config_file, DEFAULT_CONFIG_TEMPLATE)
        .await
        .context("Failed to write config file")?;

    Ok(true)
}
