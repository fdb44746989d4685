//! Command-line interface.

pub mod commands;
pub mod display;
pub mod types;

use anyhow::Result;
use std::path::Path;

pub use types::{Cli, Commands};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Load configuration from `path`, or from the project config files.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Render an error chain for the terminal or as JSON.
pub fn format_error(err: &anyhow::Error, json_mode: bool) -> String {
    let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
    if json_mode {
        let value = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": causes,
        });
        return serde_json::to_string_pretty(&value).unwrap_or_default();
    }

    let mut lines = vec![display::action_failure(&format!("Error: {err}"))];
    for cause in causes {
        lines.push(format!("  Caused by: {cause}"));
    }
    lines.join("\n")
}

/// Print the error and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = ?err, "command failed");
    if json_mode {
        println!("{}", format_error(&err, true));
    } else {
        eprintln!("{}", format_error(&err, false));
    }
    std::process::exit(1);
}
