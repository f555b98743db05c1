//! Tracing subscriber setup.
//!
//! CLI output goes to stderr. The TUI owns the terminal, so its logs go to a
//! file under the config directory instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::config_dir;

const CLI_FILTER: &str = "tricovid=warn,tricovid_core=warn";
const TUI_FILTER: &str = "tricovid=info,tricovid_core=info";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Logs to stderr.
pub fn init_cli() {
    tracing_subscriber::registry()
        .with(env_filter(CLI_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs to `~/.tricovid/tricovid.log`, returning the log path.
pub fn init_tui() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join("tricovid.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(TUI_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(path)
}
