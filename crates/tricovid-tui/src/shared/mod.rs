//! Code shared by the CLI and TUI modes.

pub mod config;
pub mod logging;
pub mod services;
