use crate::cli::read_leaves;
use crate::config::TreeConfig;
use crate::proofs::MerkleTree;
use anyhow::Result;
use std::path::Path;

/// Execute the export command
pub fn execute(file: &Path, config: &TreeConfig) -> Result<()> {
    let leaves = read_leaves(file)?;
    let tree = MerkleTree::from_config(&leaves, config)?;
    println!("{}", tree.export_tree().to_json()?);
    Ok(())
}
