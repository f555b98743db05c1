//! TriCovid TUI/CLI client.
//!
//! Provides both interactive TUI mode and non-interactive CLI commands.
//!
//! - No arguments: launches interactive TUI
//! - With subcommand: runs CLI command and exits

use anyhow::Result;
use clap::Parser;

mod cli;
mod shared;
mod tui;

use cli::args::{Cli, Commands};
use shared::config;
use shared::services::Services;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (doesn't override existing env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Config commands don't need the API, handle separately
    if let Some(Commands::Config(cmd)) = &cli.command {
        shared::logging::init_cli();
        return cli::commands::config::handle_config_command(cmd.clone());
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config file: {:#}", e);
        None
    });

    let resolved = config::resolve_config(cli.base_url.as_deref(), cli.timeout, file_config);

    match cli.command {
        Some(cmd) => {
            // CLI mode: run command and exit
            shared::logging::init_cli();
            let services = Services::new(&resolved)?;
            cli::run_command(&services, cmd).await
        }
        None => {
            // TUI mode: launch interactive interface
            let log_path = shared::logging::init_tui()?;
            tracing::info!(log = %log_path.display(), "Starting TUI");
            let services = Services::new(&resolved)?;
            tui::run(services).await
        }
    }
}
