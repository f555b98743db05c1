//! Non-interactive CLI mode.

pub mod args;
pub mod commands;
pub mod output;

use anyhow::Result;

use crate::shared::services::Services;
use args::Commands;

/// Run a CLI command and exit.
pub async fn run_command(services: &Services, command: Commands) -> Result<()> {
    match command {
        Commands::Regions { filter, strict } => {
            commands::regions::list_regions(services, filter.as_deref(), strict).await
        }
        Commands::Show { region } => commands::show::show_region(services, &region).await,
        Commands::Latest { region, metric } => {
            commands::show::show_latest(services, &region, &metric).await
        }
        Commands::Config(_) => unreachable!("Config commands handled in main.rs"),
    }
}
