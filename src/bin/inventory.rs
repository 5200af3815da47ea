//! Inventory CLI Binary
//!
//! Command-line interface for the inventory record manager.

use clap::Parser;
use inventory::logging::init_logging;
use inventory::tooling::cli::{Cli, CliContext, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Create CLI context
    let context = match CliContext::new(cli.workspace.clone(), cli.config.clone(), cli.file.clone())
    {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing inventory: {}", e);
            process::exit(1);
        }
    };

    let logging = context.config().logging.clone().with_overrides(
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
        cli.log_output.as_deref(),
    );
    if let Err(e) = init_logging(Some(&logging), cli.log_file.clone()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(path = %context.store_path().display(), "Using inventory file");

    // Execute command
    let command = cli.command.clone().unwrap_or(Commands::Menu);
    match context.execute(&command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
