//! Error types for audit-merkle

use thiserror::Error;

/// Main error type for merkle tree operations
///
/// Every variant is a contract violation by the caller. A proof that fails to
/// verify is not an error and is reported as `false` by the verifier instead.
#[derive(Error, Debug)]
pub enum MerkleError {
    /// Tree construction with zero leaves
    #[error("Cannot build a merkle tree from an empty leaf sequence")]
    EmptyInput,

    /// Leaf, hash, proof or update access outside `0..leaf_count`
    #[error("Leaf index {index} out of range for tree with {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    /// Factory request for an unknown hash algorithm identifier
    #[error("Unsupported hash strategy: {name}")]
    UnsupportedStrategy { name: String },

    /// Hex or transport decoding failure
    #[error("Malformed encoding: {reason}")]
    MalformedEncoding { reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MerkleError {
    /// Create a new index out of range error
    pub fn index_out_of_range(index: usize, leaf_count: usize) -> Self {
        Self::IndexOutOfRange { index, leaf_count }
    }

    /// Create a new unsupported strategy error
    pub fn unsupported_strategy(name: impl Into<String>) -> Self {
        Self::UnsupportedStrategy { name: name.into() }
    }

    /// Create a new malformed encoding error
    pub fn malformed_encoding(reason: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            reason: reason.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}

impl From<hex::FromHexError> for MerkleError {
    fn from(err: hex::FromHexError) -> Self {
        Self::malformed_encoding(format!("invalid hex digest: {}", err))
    }
}

/// Result type alias for merkle tree operations
pub type Result<T> = std::result::Result<T, MerkleError>;
