//! Implementation of the `taskdeck init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::setup::{initialize_project, SetupPaths};
use crate::infrastructure::storage::open_store;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file with the defaults
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub config_file: PathBuf,
    pub storage_backend: Option<String>,
    pub storage_path: Option<String>,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if !self.success {
            return self.message.clone();
        }
        let mut lines = vec![action_success(&self.message)];
        lines.push(format!("  Config: {}", self.config_file.display()));
        if let (Some(backend), Some(path)) = (&self.storage_backend, &self.storage_path) {
            lines.push(format!("  Storage: {backend} at {path}"));
        }
        lines.join("\n")
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let paths = SetupPaths::current()?;

    if !initialize_project(&paths, args.force).await? {
        let output_data = InitOutput {
            success: false,
            message: "Project already initialized. Use --force to reset the config file.".to_string(),
            config_file: paths.config_file,
            storage_backend: None,
            storage_path: None,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    let config = ConfigLoader::load_from_file(&paths.config_file)?;
    open_store(&config.storage)
        .await
        .context("Failed to create task storage")?;

    let output_data = InitOutput {
        success: true,
        message: "Initialized taskdeck project".to_string(),
        config_file: paths.config_file,
        storage_backend: Some(config.storage.backend.as_str().to_string()),
        storage_path: Some(config.storage.path),
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_output() {
        let out = InitOutput {
            success: false,
            message: "Project already initialized.".to_string(),
            config_file: PathBuf::from(".taskdeck/config.yaml"),
            storage_backend: None,
            storage_path: None,
        };
        assert_eq!(out.to_human(), "Project already initialized.");
        assert_eq!(out.to_json()["success"], false);
    }

    #[test]
    fn test_initialized_output_lists_storage() {
        console::set_colors_enabled(false);
        let out = InitOutput {
            success: true,
            message: "Initialized taskdeck project".to_string(),
            config_file: PathBuf::from(".taskdeck/config.yaml"),
            storage_backend: Some("file".to_string()),
            storage_path: Some(".taskdeck/store".to_string()),
        };
        let human = out.to_human();
        assert!(human.contains("Config: .taskdeck/config.yaml"));
        assert!(human.contains("Storage: file at .taskdeck/store"));
    }
}
