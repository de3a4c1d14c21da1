//! Tree configuration
//!
//! Selects the leaf and branch strategies and the odd-node policy, usually
//! from a TOML file:
//!
//! ```toml
//! odd_node_policy = "carry"
//!
//! [leaf]
//! algorithm = "tagged-sha256"
//! tag = "reserves/leaf"
//!
//! [branch]
//! algorithm = "tagged-sha256"
//! tag = "reserves/branch"
//! ```

use crate::core::error::{MerkleError, Result};
use crate::proofs::{MerkleProofVerifier, OddNodePolicy};
use crate::strategy::{create_strategy, StrategyKind, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Strategy selection for one side of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Algorithm identifier, resolved by [`create_strategy`]
    pub algorithm: String,
    /// Domain separation tag; the default tag applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl StrategyConfig {
    pub fn new(kind: StrategyKind, tag: Option<&str>) -> Self {
        Self {
            algorithm: kind.as_str().to_string(),
            tag: tag.map(str::to_string),
        }
    }

    pub fn resolve(&self) -> Result<Strategy> {
        create_strategy(&self.algorithm, self.tag.as_deref())
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::new(StrategyKind::TaggedSha256, None)
    }
}

/// Full tree configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub odd_node_policy: OddNodePolicy,
    pub leaf: StrategyConfig,
    pub branch: StrategyConfig,
}

impl TreeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MerkleError::configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TreeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that both strategies resolve
    pub fn validate(&self) -> Result<()> {
        self.leaf_strategy()?;
        self.branch_strategy()?;
        Ok(())
    }

    pub fn leaf_strategy(&self) -> Result<Strategy> {
        self.leaf.resolve()
    }

    pub fn branch_strategy(&self) -> Result<Strategy> {
        self.branch.resolve()
    }

    /// Verifier matching trees built from this configuration
    pub fn verifier(&self) -> Result<MerkleProofVerifier> {
        Ok(MerkleProofVerifier::new(
            self.leaf_strategy()?,
            self.branch_strategy()?,
        ))
    }
}
