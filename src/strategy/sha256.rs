//! Plain SHA-256 strategy

use super::HashStrategy;
use crate::core::{hash::sha256, types::Hash};

pub(crate) const ALGORITHM_NAME: &str = "sha256";

/// `digest = SHA-256(data)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Strategy;

impl HashStrategy for Sha256Strategy {
    fn hash(&self, data: &[u8]) -> Hash {
        sha256(data)
    }

    fn algorithm_name(&self) -> &str {
        ALGORITHM_NAME
    }
}
