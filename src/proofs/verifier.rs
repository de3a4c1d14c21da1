//! Independent proof verification
//!
//! The verifier needs only the proof and the strategies the tree was built
//! with. A mismatch is reported as `false`; errors are reserved for inputs
//! that cannot be decoded at all.

use crate::core::{error::Result, types::Hash};
use crate::proofs::legacy::{convert_legacy_path, LegacyProofElement};
use crate::proofs::proof::{Direction, MerkleProof, ProofElement, TransportElement};
use crate::strategy::{HashStrategy, Strategy};
use tracing::{debug, instrument};

/// Recomputes roots from inclusion proofs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MerkleProofVerifier {
    leaf_strategy: Strategy,
    branch_strategy: Strategy,
}

impl MerkleProofVerifier {
    pub fn new(leaf_strategy: Strategy, branch_strategy: Strategy) -> Self {
        Self {
            leaf_strategy,
            branch_strategy,
        }
    }

    /// Verifier using one strategy for both leaves and branches
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(strategy.clone(), strategy)
    }

    pub fn leaf_strategy(&self) -> &Strategy {
        &self.leaf_strategy
    }

    pub fn branch_strategy(&self) -> &Strategy {
        &self.branch_strategy
    }

    /// Fold `path` over the hash of `leaf_data`
    pub fn compute_root_from_path(&self, leaf_data: &[u8], path: &[ProofElement]) -> Hash {
        path.iter()
            .fold(self.leaf_strategy.hash(leaf_data), |current, element| {
                match element.direction {
                    Direction::Left => self.branch_strategy.hash_pair(&element.hash, &current),
                    Direction::Right => self.branch_strategy.hash_pair(&current, &element.hash),
                }
            })
    }

    /// Root implied by the proof's leaf data and path
    pub fn compute_root(&self, proof: &MerkleProof) -> Hash {
        self.compute_root_from_path(proof.leaf_data(), proof.path())
    }

    /// Whether the proof recomputes to the root it was issued against
    #[instrument(level = "trace", skip_all, fields(leaf_index = proof.leaf_index()))]
    pub fn verify(&self, proof: &MerkleProof) -> bool {
        self.verify_against(proof, proof.root())
    }

    /// Whether the proof recomputes to `root`, ignoring the recorded root
    pub fn verify_against(&self, proof: &MerkleProof, root: &Hash) -> bool {
        let computed = self.compute_root(proof);
        let valid = computed == *root;
        if !valid {
            debug!(
                leaf_index = proof.leaf_index(),
                expected = %root,
                computed = %computed,
                "proof does not reconstruct the expected root"
            );
        }
        valid
    }

    /// Verify hex-encoded `(sibling, direction code)` pairs against a hex root.
    ///
    /// Fails only when the input cannot be decoded.
    pub fn verify_hex(
        &self,
        leaf_data: &[u8],
        path: &[TransportElement],
        root_hex: &str,
    ) -> Result<bool> {
        let path = path
            .iter()
            .map(ProofElement::from_transport)
            .collect::<Result<Vec<_>>>()?;
        let root = Hash::from_hex(root_hex)?;
        Ok(self.compute_root_from_path(leaf_data, &path) == root)
    }

    /// Verify a path in one of the legacy `left`/`right` shapes
    pub fn verify_legacy(
        &self,
        leaf_data: &[u8],
        path: &[LegacyProofElement],
        root_hex: &str,
    ) -> Result<bool> {
        let path = convert_legacy_path(path)?;
        let root = Hash::from_hex(root_hex)?;
        Ok(self.compute_root_from_path(leaf_data, &path) == root)
    }
}
