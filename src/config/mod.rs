//! Configuration for building and verifying trees
//!
//! Strategy selection and the odd-node policy can be kept in a TOML file so
//! that the builder and independent verifiers agree on them.

pub mod tree_config;

// Re-export commonly used items
pub use tree_config::{StrategyConfig, TreeConfig};
