//! Taskdeck CLI entry point.

use clap::Parser;

use taskdeck::cli::commands::{init, task};
use taskdeck::cli::{handle_error, load_config, Cli, Commands};
use taskdeck::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };
    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Init(args) => init::execute(args, cli.json).await,
        Commands::Add(args) => task::execute_add(args, &config, cli.json).await,
        Commands::Edit(args) => task::execute_edit(args, &config, cli.json).await,
        Commands::Delete(args) => task::execute_delete(args, &config, cli.json).await,
        Commands::Toggle(args) => task::execute_toggle(args, &config, cli.json).await,
        Commands::Show(args) => task::execute_show(args, &config, cli.json).await,
        Commands::List(args) => task::execute_list(args, &config, cli.json).await,
        Commands::Count => task::execute_count(&config, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
