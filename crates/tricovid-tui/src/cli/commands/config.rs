//! Configuration command handlers.

use std::fs;

use anyhow::{bail, Result};

use crate::cli::args::ConfigCommands;
use crate::cli::output::{print_info, print_key_value, print_success};
use crate::shared::config::{config_path, load_config, TrackerConfig};

/// Handle config subcommands.
pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Init { force } => init_config(force),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config() -> Result<()> {
    let config = match load_config()? {
        Some(cfg) => {
            println!("Current configuration:");
            cfg
        }
        None => {
            println!("No config file found. Using defaults:");
            TrackerConfig::default()
        }
    };
    println!();

    print_key_value("Base URL", &config.base_url);
    print_key_value(
        "Timeout",
        &if config.timeout_secs == 0 {
            "disabled".to_string()
        } else {
            format!("{}s", config.timeout_secs)
        },
    );
    print_key_value("Death metric", &config.death_metric);
    print_key_value("Case metric", &config.case_metric);
    print_key_value("Suggestions", &config.suggestion_limit.to_string());

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = config_path()?;

    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let content = huml_rs::serde::to_string(&TrackerConfig::default())?;
    fs::write(&path, content)?;

    print_success(&format!("Created config file at {}", path.display()));
    print_info("Edit this file to point at another API or change the metrics shown.");

    Ok(())
}

fn show_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}
