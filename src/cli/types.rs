//! CLI argument types.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::init::InitArgs;
use crate::cli::commands::task::{AddArgs, EditArgs, IdArgs, ListArgs};

#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "Taskdeck - local task manager", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .taskdeck/
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize taskdeck configuration and storage
    Init(InitArgs),

    /// Add a new task
    Add(AddArgs),

    /// Edit fields of an existing task
    Edit(EditArgs),

    /// Delete a task
    Delete(IdArgs),

    /// Toggle a task between complete and incomplete
    Toggle(IdArgs),

    /// Show task details
    Show(IdArgs),

    /// List tasks, filtered and sorted
    List(ListArgs),

    /// Show how many tasks are stored
    Count,
}
