//! CLI tool for inspecting node selection records.
//!
//! Provides commands for:
//! - Parsing node URLs
//! - Building and printing node records

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
