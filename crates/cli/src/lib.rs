//! # modelddl CLI
//!
//! Command-line interface for modelddl.
//!
//! ## Commands
//!
//! - `convert` - Print `CREATE TABLE` (and optional `CREATE INDEX`) statements
//! - `drop` - Print `DROP TABLE IF EXISTS` statements
//! - `drivers` - List the registered driver identities
//!
//! Statements go to stdout (or `--output FILE`), separated by blank lines.
//! Status lines and logs go to stderr.

pub mod commands;
pub mod config;
pub mod output;

pub use commands::{Command, ConvertCmd, DropCmd, TargetArgs};
pub use config::CliConfig;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = "modelddl";

#[derive(Parser, Debug)]
#[command(name = "modelddl", author, version, about, long_about = None)]
pub struct Args {
    /// TOML config file (defaults to ./modelddl.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Default `tracing` filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Resolve configuration and execute the selected command
pub fn run(args: Args) -> anyhow::Result<()> {
    let config = CliConfig::load(args.config.as_deref())?;
    tracing::debug!(?config, "resolved configuration");
    args.command.run(config)
}
