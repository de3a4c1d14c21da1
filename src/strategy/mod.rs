//! Pluggable hash strategies
//!
//! A strategy maps bytes to a 32-byte digest and carries an identifying name.
//! The supported set is closed: plain SHA-256 and BIP-340 style tagged SHA-256.
//! [`Strategy`] wraps both so trees and verifiers can hold either variant
//! without dynamic dispatch, and [`create_strategy`] resolves an algorithm
//! identifier into one.

pub mod sha256;
pub mod tagged;

use crate::core::{
    error::{MerkleError, Result},
    types::{Hash, HASH_SIZE},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use sha256::Sha256Strategy;
pub use tagged::{TaggedSha256Strategy, DEFAULT_TAG};

/// Capability shared by every hash strategy
pub trait HashStrategy {
    /// Digest of `data`. Must be deterministic and side-effect free.
    fn hash(&self, data: &[u8]) -> Hash;

    /// Identifier of the underlying algorithm
    fn algorithm_name(&self) -> &str;

    /// Digest of `left || right`, the branch input for a parent node
    fn hash_pair(&self, left: &Hash, right: &Hash) -> Hash {
        let mut combined = [0u8; HASH_SIZE * 2];
        combined[..HASH_SIZE].copy_from_slice(left.as_bytes());
        combined[HASH_SIZE..].copy_from_slice(right.as_bytes());
        self.hash(&combined)
    }
}

/// Algorithm identifiers understood by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    #[serde(rename = "sha256", alias = "sha-256", alias = "SHA-256")]
    Sha256,
    #[serde(rename = "tagged-sha256", alias = "tagged_sha256", alias = "tagged")]
    TaggedSha256,
}

impl StrategyKind {
    /// Canonical identifier
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Sha256 => sha256::ALGORITHM_NAME,
            StrategyKind::TaggedSha256 => tagged::ALGORITHM_NAME,
        }
    }

    /// Whether the algorithm takes a domain separation tag
    pub fn uses_tag(self) -> bool {
        matches!(self, StrategyKind::TaggedSha256)
    }
}

impl FromStr for StrategyKind {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(StrategyKind::Sha256),
            "tagged-sha256" | "tagged_sha256" | "tagged" => Ok(StrategyKind::TaggedSha256),
            _ => Err(MerkleError::unsupported_strategy(s)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the supported hash strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Sha256(Sha256Strategy),
    TaggedSha256(TaggedSha256Strategy),
}

impl Strategy {
    /// Plain SHA-256
    pub fn sha256() -> Self {
        Strategy::Sha256(Sha256Strategy)
    }

    /// Tagged SHA-256 under `tag`
    pub fn tagged(tag: impl Into<String>) -> Self {
        Strategy::TaggedSha256(TaggedSha256Strategy::new(tag))
    }

    /// Build the strategy for `kind`.
    ///
    /// Tagged strategies fall back to [`DEFAULT_TAG`] when `tag` is `None`.
    /// Callers that rely on separating applications must pass distinct tags.
    /// A tag passed for plain SHA-256 is ignored.
    pub fn from_kind(kind: StrategyKind, tag: Option<&str>) -> Self {
        match kind {
            StrategyKind::Sha256 => {
                if let Some(tag) = tag {
                    tracing::warn!(tag, "ignoring tag for plain sha256 strategy");
                }
                Strategy::sha256()
            }
            StrategyKind::TaggedSha256 => match tag {
                Some(tag) => Strategy::tagged(tag),
                None => {
                    tracing::warn!(tag = DEFAULT_TAG, "no tag supplied, using default tag");
                    Strategy::TaggedSha256(TaggedSha256Strategy::default())
                }
            },
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Sha256(_) => StrategyKind::Sha256,
            Strategy::TaggedSha256(_) => StrategyKind::TaggedSha256,
        }
    }

    /// Domain separation tag, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            Strategy::Sha256(_) => None,
            Strategy::TaggedSha256(s) => Some(s.tag()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sha256(_) => f.write_str(self.algorithm_name()),
            Strategy::TaggedSha256(s) => write!(f, "{}({})", self.algorithm_name(), s.tag()),
        }
    }
}

impl Default for Strategy {
    /// Tagged SHA-256 with [`DEFAULT_TAG`]
    fn default() -> Self {
        Strategy::TaggedSha256(TaggedSha256Strategy::default())
    }
}

impl HashStrategy for Strategy {
    fn hash(&self, data: &[u8]) -> Hash {
        match self {
            Strategy::Sha256(s) => s.hash(data),
            Strategy::TaggedSha256(s) => s.hash(data),
        }
    }

    fn algorithm_name(&self) -> &str {
        match self {
            Strategy::Sha256(s) => s.algorithm_name(),
            Strategy::TaggedSha256(s) => s.algorithm_name(),
        }
    }

    fn hash_pair(&self, left: &Hash, right: &Hash) -> Hash {
        match self {
            Strategy::Sha256(s) => s.hash_pair(left, right),
            Strategy::TaggedSha256(s) => s.hash_pair(left, right),
        }
    }
}

impl From<Sha256Strategy> for Strategy {
    fn from(s: Sha256Strategy) -> Self {
        Strategy::Sha256(s)
    }
}

impl From<TaggedSha256Strategy> for Strategy {
    fn from(s: TaggedSha256Strategy) -> Self {
        Strategy::TaggedSha256(s)
    }
}

/// Resolve an algorithm identifier (plus optional tag) to a strategy
pub fn create_strategy(algorithm: &str, tag: Option<&str>) -> Result<Strategy> {
    let kind: StrategyKind = algorithm.parse()?;
    Ok(Strategy::from_kind(kind, tag))
}
