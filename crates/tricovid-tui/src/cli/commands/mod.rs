//! CLI command handlers.

pub mod config;
pub mod regions;
pub mod show;
