//! Inclusion proof value types

use crate::core::{
    error::{MerkleError, Result},
    types::Hash,
};
use serde::{Deserialize, Serialize};

/// Side of the current hash the sibling sits on when computing the parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Sibling is prepended: `parent = H(sibling || current)`
    Left,
    /// Sibling is appended: `parent = H(current || sibling)`
    Right,
}

impl Direction {
    /// Transport code: 0 for left, 1 for right
    pub fn code(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Right),
            other => Err(MerkleError::malformed_encoding(format!(
                "invalid direction code {other}, expected 0 (left) or 1 (right)"
            ))),
        }
    }
}

/// A single element in a merkle proof path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofElement {
    /// Hash of the sibling node
    pub hash: Hash,
    /// Whether the sibling is on the left or right
    pub direction: Direction,
}

impl ProofElement {
    pub fn new(hash: Hash, direction: Direction) -> Self {
        Self { hash, direction }
    }

    /// Flat `(hex digest, direction code)` form
    pub fn to_transport(&self) -> TransportElement {
        (self.hash.to_hex(), self.direction.code())
    }

    pub fn from_transport(element: &TransportElement) -> Result<Self> {
        let (hash_hex, code) = element;
        Ok(Self {
            hash: Hash::from_hex(hash_hex)?,
            direction: Direction::from_code(*code)?,
        })
    }
}

/// Transport representation of a proof element
pub type TransportElement = (String, u8);

/// Inclusion proof for one leaf, bound to the root it was issued against
///
/// A proof is a snapshot. Updating the tree afterwards does not change it: it
/// keeps recomputing to its recorded root and stops matching the tree's new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    #[serde(with = "hex")]
    leaf_data: Vec<u8>,
    leaf_index: usize,
    path: Vec<ProofElement>,
    root: Hash,
}

impl MerkleProof {
    pub fn new(
        leaf_data: impl Into<Vec<u8>>,
        leaf_index: usize,
        path: Vec<ProofElement>,
        root: Hash,
    ) -> Self {
        Self {
            leaf_data: leaf_data.into(),
            leaf_index,
            path,
            root,
        }
    }

    /// Original data of the proven leaf
    pub fn leaf_data(&self) -> &[u8] {
        &self.leaf_data
    }

    pub fn leaf_index(&self) -> usize {
        self.leaf_index
    }

    /// Sibling path ordered from the leaf level upwards
    pub fn path(&self) -> &[ProofElement] {
        &self.path
    }

    /// Root digest recorded when the proof was issued
    pub fn root(&self) -> &Hash {
        &self.root
    }

    pub fn root_hex(&self) -> String {
        self.root.to_hex()
    }

    /// Copy of this proof claiming different leaf data
    pub fn with_leaf_data(&self, leaf_data: impl Into<Vec<u8>>) -> Self {
        Self {
            leaf_data: leaf_data.into(),
            ..self.clone()
        }
    }

    /// Path as `(hex digest, direction code)` pairs
    pub fn to_transport(&self) -> Vec<TransportElement> {
        self.path.iter().map(ProofElement::to_transport).collect()
    }

    /// Rebuild a proof from its transport representation
    pub fn from_transport(
        leaf_data: impl Into<Vec<u8>>,
        leaf_index: usize,
        path: &[TransportElement],
        root_hex: &str,
    ) -> Result<Self> {
        let path = path
            .iter()
            .map(ProofElement::from_transport)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(leaf_data, leaf_index, path, Hash::from_hex(root_hex)?))
    }

    /// Serialize proof to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(MerkleError::JsonSerialization)
    }

    /// Deserialize proof from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(MerkleError::JsonSerialization)
    }
}
