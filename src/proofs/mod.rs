//! Merkle tree and proof system
//!
//! This module builds trees over ordered leaves, issues inclusion proofs
//! and verifies them independently of the tree that produced them.

pub mod legacy;
pub mod merkle;
pub mod proof;
pub mod verifier;

// Re-export commonly used items
pub use legacy::{convert_legacy_path, KeyedElement, LegacyPosition, LegacyProofElement};
pub use merkle::{MerkleTree, OddNodePolicy, TreeExport};
pub use proof::{Direction, MerkleProof, ProofElement, TransportElement};
pub use verifier::MerkleProofVerifier;
