//! SHA-256 primitives shared by the hash strategies
//!
//! The tagged construction follows BIP-340:
//! `tagged_hash(tag, msg) = SHA-256(SHA-256(tag) || SHA-256(tag) || msg)`.

use crate::core::types::Hash;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Compute SHA-256 hash of multiple chunks of data as if concatenated
pub fn hash_chunks(chunks: &[&[u8]]) -> Hash {
    let mut hasher = Sha256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    Hash::from_bytes(hasher.finalize().into())
}

/// Hash of the UTF-8 bytes of a domain separation tag
pub fn tag_hash(tag: &str) -> Hash {
    sha256(tag.as_bytes())
}

/// Tagged hash using an already computed tag hash
pub fn tagged_hash_prehashed(tag_hash: &Hash, data: &[u8]) -> Hash {
    hash_chunks(&[tag_hash.as_bytes(), tag_hash.as_bytes(), data])
}

/// Tagged hash of `data` under `tag`
pub fn tagged_hash(tag: &str, data: &[u8]) -> Hash {
    tagged_hash_prehashed(&tag_hash(tag), data)
}
