use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::{Config, StorageBackend};

/// Project configuration file, created by `taskdeck init`
pub const PROJECT_CONFIG_PATH: &str = ".taskdeck/config.yaml";
/// Optional local overrides, never created automatically
pub const LOCAL_CONFIG_PATH: &str = ".taskdeck/local.yaml";
/// Prefix for environment overrides; `__` separates nested keys
pub const ENV_PREFIX: &str = "TASKDECK_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Storage path cannot be empty for the {0} backend")]
    EmptyStoragePath(&'static str),

    #[error("Storage key cannot be empty")]
    EmptyStorageKey,

    #[error("Invalid storage key '{0}': use only letters, digits, '.', '_' and '-'")]
    InvalidStorageKey(String),

    #[error("Invalid quota_bytes: {0}. Must be at least 1")]
    InvalidQuota(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .taskdeck/config.yaml (project config, created by init)
    /// 3. .taskdeck/local.yaml (project local overrides, optional)
    /// 4. Environment variables (TASKDECK_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG_PATH))
            .merge(Yaml::file(LOCAL_CONFIG_PATH))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let storage = &config.storage;
        if storage.backend != StorageBackend::Memory && storage.path.trim().is_empty() {
            return Err(ConfigError::EmptyStoragePath(storage.backend.as_str()));
        }

        if storage.key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if crate::domain::ports::validate_key(&storage.key).is_err() {
            return Err(ConfigError::InvalidStorageKey(storage.key.clone()));
        }

        if storage.quota_bytes == Some(0) {
            return Err(ConfigError::InvalidQuota(0));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
