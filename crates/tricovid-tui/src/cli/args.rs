//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// TriCovid: latest COVID-19 figures for UK local authorities.
///
/// Run without arguments to launch interactive TUI mode.
/// Run with a subcommand for non-interactive CLI mode.
#[derive(Parser)]
#[command(name = "tricovid")]
#[command(about = "Latest COVID-19 case and death figures for UK local authorities", long_about = None)]
pub struct Cli {
    /// API base URL (overrides environment and config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds, 0 to disable
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Clone)]
pub enum Commands {
    /// List known regions
    Regions {
        /// Only show regions starting with this text
        #[arg(long)]
        filter: Option<String>,

        /// Report a failed listing as an error instead of an empty list
        #[arg(long)]
        strict: bool,
    },

    /// Show the latest case and death figures for a region
    Show {
        /// Region name, e.g. "Oxford"
        region: String,
    },

    /// Show the latest observation of any metric for a region
    Latest {
        /// Region name
        region: String,

        /// Metric identifier, e.g. "COVID-19_deaths_ONSByWeek"
        metric: String,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show config file path
    Path,
}
