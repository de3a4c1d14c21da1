//! Audit Merkle CLI
//!
//! Command-line interface for building merkle commitments and checking proofs.

use anyhow::Result;
use audit_merkle::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    // Execute the command
    cli.run()
}
