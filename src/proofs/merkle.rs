//! Merkle tree implementation
//!
//! Levels are stored as flat digest vectors addressed by `(level, position)`,
//! leaves at level 0 and the root alone in the last level. Updating a leaf
//! rewrites exactly one slot per level.

use crate::config::TreeConfig;
use crate::core::{
    error::{MerkleError, Result},
    types::Hash,
};
use crate::proofs::proof::{Direction, MerkleProof, ProofElement};
use crate::proofs::verifier::MerkleProofVerifier;
use crate::strategy::{HashStrategy, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

/// How a level with an odd number of nodes is reduced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OddNodePolicy {
    /// The unpaired node moves up unchanged, with no extra hashing
    #[default]
    #[serde(rename = "carry", alias = "carry-forward")]
    CarryForward,
    /// The unpaired node is hashed with a copy of itself.
    ///
    /// Deprecated: kept only to reproduce roots from older deployments. It
    /// gives different roots than [`OddNodePolicy::CarryForward`] for any
    /// input with an odd level.
    #[serde(rename = "duplicate", alias = "duplicate-last")]
    DuplicateLast,
}

/// Level structure as lowercase hex, leaves first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeExport {
    pub levels: Vec<Vec<String>>,
}

impl TreeExport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MerkleError::JsonSerialization)
    }
}

/// Binary merkle tree over an ordered, non-empty sequence of leaves
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Original leaf data, in input order
    leaves: Vec<Vec<u8>>,
    /// All levels of the tree (leaves at index 0)
    levels: Vec<Vec<Hash>>,
    leaf_strategy: Strategy,
    branch_strategy: Strategy,
    policy: OddNodePolicy,
}

impl MerkleTree {
    /// Build a tree hashing leaves and branches with the same strategy
    pub fn new<I, T>(leaves: I, strategy: Strategy) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        Self::with_strategies(leaves, strategy.clone(), strategy)
    }

    pub fn with_strategies<I, T>(
        leaves: I,
        leaf_strategy: Strategy,
        branch_strategy: Strategy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        Self::with_policy(leaves, leaf_strategy, branch_strategy, OddNodePolicy::default())
    }

    /// Build a tree with an explicit odd-node policy
    #[instrument(level = "debug", skip_all, fields(policy = ?policy))]
    pub fn with_policy<I, T>(
        leaves: I,
        leaf_strategy: Strategy,
        branch_strategy: Strategy,
        policy: OddNodePolicy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let leaves: Vec<Vec<u8>> = leaves.into_iter().map(|l| l.as_ref().to_vec()).collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }
        if policy == OddNodePolicy::DuplicateLast {
            warn!("building tree with deprecated duplicate-last odd node policy");
        }

        let leaf_hashes: Vec<Hash> = leaves.iter().map(|l| leaf_strategy.hash(l)).collect();
        let levels = build_levels(leaf_hashes, &branch_strategy, policy);

        let tree = Self {
            leaves,
            levels,
            leaf_strategy,
            branch_strategy,
            policy,
        };
        debug!(
            leaf_count = tree.leaf_count(),
            depth = tree.depth(),
            root = %tree.root(),
            "built merkle tree"
        );
        Ok(tree)
    }

    /// Build a tree with the strategies and policy named in `config`
    pub fn from_config<I, T>(leaves: I, config: &TreeConfig) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        Self::with_policy(
            leaves,
            config.leaf_strategy()?,
            config.branch_strategy()?,
            config.odd_node_policy,
        )
    }

    /// Root digest
    pub fn root(&self) -> Hash {
        // Construction guarantees at least one level whose last entry is the root
        self.levels[self.levels.len() - 1][0]
    }

    pub fn root_hex(&self) -> String {
        self.root().to_hex()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Original data of the leaf at `index`
    pub fn leaf(&self, index: usize) -> Result<&[u8]> {
        self.check_index(index)?;
        Ok(&self.leaves[index])
    }

    /// Leaf digest at `index`
    pub fn leaf_hash(&self, index: usize) -> Result<Hash> {
        self.check_index(index)?;
        Ok(self.levels[0][index])
    }

    pub fn leaves(&self) -> impl Iterator<Item = &[u8]> {
        self.leaves.iter().map(Vec::as_slice)
    }

    /// Index of the first leaf whose data equals `data`
    pub fn find_leaf(&self, data: impl AsRef<[u8]>) -> Option<usize> {
        let data = data.as_ref();
        self.leaves.iter().position(|leaf| leaf.as_slice() == data)
    }

    /// Raw digests of every level, leaves first
    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    pub fn leaf_strategy(&self) -> &Strategy {
        &self.leaf_strategy
    }

    pub fn branch_strategy(&self) -> &Strategy {
        &self.branch_strategy
    }

    pub fn policy(&self) -> OddNodePolicy {
        self.policy
    }

    /// Hex dump of every level for inspection
    pub fn export_tree(&self) -> TreeExport {
        TreeExport {
            levels: self
                .levels
                .iter()
                .map(|level| level.iter().map(Hash::to_hex).collect())
                .collect(),
        }
    }

    /// Inclusion proof for the leaf at `index`, bound to the current root
    #[instrument(level = "trace", skip(self))]
    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof> {
        self.check_index(index)?;

        let mut path = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.levels[..self.depth()] {
            let sibling = position ^ 1;
            if let Some(hash) = level.get(sibling) {
                let direction = if position % 2 == 0 {
                    Direction::Right
                } else {
                    Direction::Left
                };
                path.push(ProofElement::new(*hash, direction));
            } else if self.policy == OddNodePolicy::DuplicateLast {
                path.push(ProofElement::new(level[position], Direction::Right));
            }
            position /= 2;
        }

        trace!(index, path_len = path.len(), "generated proof");
        Ok(MerkleProof::new(
            self.leaves[index].clone(),
            index,
            path,
            self.root(),
        ))
    }

    /// Replace the data of one leaf and recompute its path to the root.
    ///
    /// Returns the new root. Proofs issued earlier keep their recorded root.
    #[instrument(level = "debug", skip(self, data))]
    pub fn update_leaf(&mut self, index: usize, data: impl AsRef<[u8]>) -> Result<Hash> {
        self.check_index(index)?;

        let data = data.as_ref().to_vec();
        self.levels[0][index] = self.leaf_strategy.hash(&data);
        self.leaves[index] = data;

        let mut position = index;
        for level in 0..self.depth() {
            let parent = position / 2;
            let digest = parent_digest(
                &self.levels[level],
                parent,
                &self.branch_strategy,
                self.policy,
            );
            self.levels[level + 1][parent] = digest;
            position = parent;
        }

        let root = self.root();
        debug!(index, root = %root, "updated leaf");
        Ok(root)
    }

    /// Verify `proof` against this tree's current root and strategies
    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        self.verifier().verify_against(proof, &self.root())
    }

    /// Verifier configured with this tree's strategies
    pub fn verifier(&self) -> MerkleProofVerifier {
        MerkleProofVerifier::new(self.leaf_strategy.clone(), self.branch_strategy.clone())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.leaves.len() {
            return Err(MerkleError::index_out_of_range(index, self.leaves.len()));
        }
        Ok(())
    }
}

/// Reduce levels until only the root remains
fn build_levels(
    leaf_hashes: Vec<Hash>,
    branch: &Strategy,
    policy: OddNodePolicy,
) -> Vec<Vec<Hash>> {
    let mut levels = vec![leaf_hashes];
    while levels[levels.len() - 1].len() > 1 {
        let current = &levels[levels.len() - 1];
        let next: Vec<Hash> = (0..current.len().div_ceil(2))
            .map(|parent| parent_digest(current, parent, branch, policy))
            .collect();
        trace!(level = levels.len(), width = next.len(), "built level");
        levels.push(next);
    }
    levels
}

/// Digest of the node at `parent` in the level above `level`
fn parent_digest(level: &[Hash], parent: usize, branch: &Strategy, policy: OddNodePolicy) -> Hash {
    let left = &level[2 * parent];
    match (level.get(2 * parent + 1), policy) {
        (Some(right), _) => branch.hash_pair(left, right),
        (None, OddNodePolicy::CarryForward) => *left,
        (None, OddNodePolicy::DuplicateLast) => branch.hash_pair(left, left),
    }
}
