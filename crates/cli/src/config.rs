//! Command-line configuration.

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::commands::Command;

/// Inspect node selection records.
#[derive(Debug, Parser)]
#[command(name = "uploadselection", version, about)]
pub struct CliConfig {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Log level selected by the `-v` count. Warnings are always shown.
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Install the log subscriber and run the selected command.
    pub fn run(self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level())
            .with_writer(std::io::stderr)
            .init();

        let result = self.command.execute()?;
        println!("{}", result);
        Ok(())
    }
}
