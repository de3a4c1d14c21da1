use crate::cli::read_leaves;
use crate::config::TreeConfig;
use crate::proofs::MerkleTree;
use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::Path;

/// Execute the root command
pub fn execute(file: &Path, json: bool, config: &TreeConfig) -> Result<()> {
    let leaves = read_leaves(file)?;
    let tree = MerkleTree::from_config(&leaves, config)?;

    if json {
        let output = json!({
            "root": tree.root_hex(),
            "leaf_count": tree.leaf_count(),
            "depth": tree.depth(),
            "leaf_strategy": tree.leaf_strategy().to_string(),
            "branch_strategy": tree.branch_strategy().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}: {}", "Root Hash".bold(), tree.root_hex().cyan());
        println!("{}: {}", "Leaves".bold(), tree.leaf_count());
        println!("{}: {}", "Depth".bold(), tree.depth());
        println!(
            "{}: {} / {}",
            "Strategies".bold(),
            tree.leaf_strategy(),
            tree.branch_strategy()
        );
    }

    Ok(())
}
