//! modelddl
//!
//! Compiles ORM model descriptors into MySQL DDL statements.

use clap::Parser;
use modelddl_cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = modelddl_cli::VERSION, "starting");
    modelddl_cli::run(args)
}
