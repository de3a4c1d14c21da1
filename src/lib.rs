//! Audit Merkle - binary hash tree commitments with inclusion proofs
//!
//! Builds a binary Merkle tree over an ordered sequence of records and commits
//! to all of them with a single root digest. Inclusion proofs show that one
//! record belongs to the committed set without revealing the others, which is
//! what proof-of-reserve snapshots, transaction-log commitments and
//! tamper-evident audit logs need.
//!
//! # Core Features
//!
//! - **Domain-Separated Hashing**: plain SHA-256 or BIP-340 style tagged SHA-256,
//!   chosen independently for leaves and branches
//! - **Carry-Forward Trees**: an unpaired node moves up unchanged instead of being
//!   duplicated
//! - **Inclusion Proofs**: compact sibling paths bound to the root they were issued against
//! - **Standalone Verification**: verifiers need only the proof and the strategies
//! - **Incremental Updates**: replacing a leaf recomputes only its path to the root
//!
//! # Example Usage
//!
//! ```rust
//! use audit_merkle::{MerkleProofVerifier, MerkleTree, Strategy};
//!
//! let mut tree = MerkleTree::new(["aaa", "bbb", "ccc", "ddd"], Strategy::default())?;
//! let proof = tree.generate_proof(2)?;
//!
//! let verifier = MerkleProofVerifier::default();
//! assert!(verifier.verify(&proof));
//!
//! let new_root = tree.update_leaf(2, "CCC")?;
//! assert!(!verifier.verify_against(&proof, &new_root));
//! # Ok::<(), audit_merkle::MerkleError>(())
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and CPU-bound. Trees and verifiers are
//! `Send + Sync`; reads take `&self` and may run in parallel, while
//! [`MerkleTree::update_leaf`] takes `&mut self`, so sharing a tree that is
//! being updated needs a lock held around each whole operation.

pub mod cli;
pub mod config;
pub mod core;
pub mod proofs;
pub mod strategy;

// Re-export commonly used types
pub use self::core::{
    error::{MerkleError, Result},
    types::{Hash, RootHash},
};

pub use config::TreeConfig;

pub use proofs::{
    Direction, LegacyProofElement, MerkleProof, MerkleProofVerifier, MerkleTree, OddNodePolicy,
    ProofElement, TreeExport,
};

pub use strategy::{create_strategy, HashStrategy, Strategy, StrategyKind, DEFAULT_TAG};

/// Current version of audit-merkle
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
