//! Core types and utilities for audit-merkle
//!
//! This module contains the digest type, error handling,
//! and the raw SHA-256 primitives used by every hash strategy.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{MerkleError, Result};
pub use hash::{sha256, tag_hash, tagged_hash};
pub use types::{Hash, RootHash, HASH_SIZE};
