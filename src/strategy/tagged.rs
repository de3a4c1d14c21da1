//! Domain separated SHA-256 strategy

use super::HashStrategy;
use crate::core::{
    hash::{hash_chunks, tag_hash, tagged_hash_prehashed},
    types::Hash,
};

pub(crate) const ALGORITHM_NAME: &str = "tagged-sha256";

/// Tag applied when a tagged strategy is requested without one.
///
/// Leaf and branch hashing share it unless distinct tags are supplied.
pub const DEFAULT_TAG: &str = "MerkleTree";

/// `digest = SHA-256(tagHash || tagHash || data)` with `tagHash = SHA-256(tag)`
///
/// The tag hash is computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedSha256Strategy {
    tag: String,
    tag_hash: Hash,
}

impl TaggedSha256Strategy {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag_hash = tag_hash(&tag);
        Self { tag, tag_hash }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn tag_hash(&self) -> &Hash {
        &self.tag_hash
    }
}

impl Default for TaggedSha256Strategy {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl HashStrategy for TaggedSha256Strategy {
    fn hash(&self, data: &[u8]) -> Hash {
        tagged_hash_prehashed(&self.tag_hash, data)
    }

    fn algorithm_name(&self) -> &str {
        ALGORITHM_NAME
    }

    fn hash_pair(&self, left: &Hash, right: &Hash) -> Hash {
        hash_chunks(&[
            self.tag_hash.as_bytes(),
            self.tag_hash.as_bytes(),
            left.as_bytes(),
            right.as_bytes(),
        ])
    }
}
