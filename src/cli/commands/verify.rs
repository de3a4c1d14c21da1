use crate::config::TreeConfig;
use crate::core::types::Hash;
use crate::proofs::MerkleProof;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

/// Execute the verify command
pub fn execute(proof_path: &Path, root: Option<&str>, config: &TreeConfig) -> Result<()> {
    let proof_data = std::fs::read_to_string(proof_path)
        .with_context(|| format!("Failed to read proof {}", proof_path.display()))?;
    let proof = MerkleProof::from_json(&proof_data)?;
    let verifier = config.verifier()?;

    let expected = match root {
        Some(hex) => Hash::from_hex(hex).context("Invalid expected root hash format")?,
        None => *proof.root(),
    };

    println!("  • Leaf index: {}", proof.leaf_index());
    println!("  • Proof elements: {}", proof.path().len());
    println!("  • Expected root: {}", expected.to_hex().cyan());

    if verifier.verify_against(&proof, &expected) {
        println!("{}", "✓ Proof verification successful!".green());
        Ok(())
    } else {
        println!("{}", "✗ Proof verification failed!".red());
        println!(
            "  • Computed root: {}",
            verifier.compute_root(&proof).to_hex().yellow()
        );
        bail!("Proof does not reconstruct the expected root")
    }
}
