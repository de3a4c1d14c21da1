//! Command-line interface for audit-merkle
//!
//! Leaf files are newline-delimited: every line is one leaf, in order.

use crate::config::TreeConfig;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub mod commands;

/// Audit Merkle - commit to ordered records and prove inclusion
#[derive(Parser)]
#[command(
    name = "audit-merkle",
    version,
    about = "Build merkle commitments over newline-delimited records and verify inclusion proofs",
    long_about = "Audit Merkle builds a binary merkle tree over the lines of a file, prints its \
                  root, issues inclusion proofs for single lines and verifies them independently."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file selecting hash strategies and odd node policy
    #[arg(long, global = true, env = "AUDIT_MERKLE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the root of the tree built from a leaf file
    Root {
        /// Newline-delimited leaf file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an inclusion proof for one leaf
    Prove {
        /// Newline-delimited leaf file
        file: PathBuf,

        /// Zero-based index of the leaf to prove
        #[arg(short, long)]
        index: usize,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify a JSON inclusion proof
    Verify {
        /// Proof file produced by `prove`
        proof: PathBuf,

        /// Expected root hash (default: the root recorded in the proof)
        #[arg(long)]
        root: Option<String>,
    },

    /// Print every level of the tree as JSON
    Export {
        /// Newline-delimited leaf file
        file: PathBuf,
    },
}

impl Cli {
    /// Dispatch the parsed command
    pub fn run(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        match self.command {
            Commands::Root { file, json } => commands::root::execute(&file, json, &config),
            Commands::Prove {
                file,
                index,
                output,
            } => commands::prove::execute(&file, index, output.as_deref(), &config),
            Commands::Verify { proof, root } => {
                commands::verify::execute(&proof, root.as_deref(), &config)
            }
            Commands::Export { file } => commands::export::execute(&file, &config),
        }
    }
}

/// Load the configuration named on the command line, or the default one
pub fn load_config(path: Option<&Path>) -> Result<TreeConfig> {
    match path {
        Some(path) => TreeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(TreeConfig::default()),
    }
}

/// Read a newline-delimited leaf file
pub fn read_leaves(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read leaf file {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}
