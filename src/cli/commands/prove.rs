use crate::cli::read_leaves;
use crate::config::TreeConfig;
use crate::proofs::MerkleTree;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the prove command
pub fn execute(
    file: &Path,
    index: usize,
    output: Option<&Path>,
    config: &TreeConfig,
) -> Result<()> {
    let leaves = read_leaves(file)?;
    let tree = MerkleTree::from_config(&leaves, config)?;
    let proof = tree.generate_proof(index)?;
    let json = proof.to_json()?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            eprintln!(
                "{} Proof for leaf {} written to {}",
                "✓".green(),
                index,
                path.display()
            );
            eprintln!("  • Root: {}", proof.root_hex().cyan());
            eprintln!("  • Path length: {}", proof.path().len());
        }
        None => println!("{}", json),
    }

    Ok(())
}
