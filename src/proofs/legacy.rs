//! Adapters for proofs produced by older tooling
//!
//! Two historical shapes are accepted and translated into [`ProofElement`]:
//! string-keyed objects (`{"left": "<hex>"}` / `{"right": "<hex>"}`) and
//! `(hex, position)` pairs where position is `0`/`1` or `"left"`/`"right"`.
//! Nothing here hashes; verification goes through [`MerkleProofVerifier`].
//!
//! [`MerkleProofVerifier`]: crate::proofs::MerkleProofVerifier

use crate::core::{
    error::{MerkleError, Result},
    types::Hash,
};
use crate::proofs::proof::{Direction, ProofElement};
use serde::{Deserialize, Serialize};

/// Two-state position used by older proofs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyPosition {
    /// `0` = left, `1` = right
    Code(u8),
    /// `"left"` or `"right"`
    Name(String),
}

impl LegacyPosition {
    pub fn to_direction(&self) -> Result<Direction> {
        match self {
            LegacyPosition::Code(code) => Direction::from_code(*code),
            LegacyPosition::Name(name) => match name.to_ascii_lowercase().as_str() {
                "left" => Ok(Direction::Left),
                "right" => Ok(Direction::Right),
                _ => Err(MerkleError::malformed_encoding(format!(
                    "invalid legacy position {name:?}"
                ))),
            },
        }
    }
}

/// String-keyed legacy element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyedElement {
    Left(String),
    Right(String),
}

/// Any accepted legacy proof element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyProofElement {
    Keyed(KeyedElement),
    Positioned(String, LegacyPosition),
}

impl LegacyProofElement {
    pub fn left(hash_hex: impl Into<String>) -> Self {
        LegacyProofElement::Keyed(KeyedElement::Left(hash_hex.into()))
    }

    pub fn right(hash_hex: impl Into<String>) -> Self {
        LegacyProofElement::Keyed(KeyedElement::Right(hash_hex.into()))
    }

    /// Translate into the canonical element
    pub fn to_element(&self) -> Result<ProofElement> {
        let (hash_hex, direction) = match self {
            LegacyProofElement::Keyed(KeyedElement::Left(hex)) => (hex, Direction::Left),
            LegacyProofElement::Keyed(KeyedElement::Right(hex)) => (hex, Direction::Right),
            LegacyProofElement::Positioned(hex, position) => (hex, position.to_direction()?),
        };
        Ok(ProofElement::new(Hash::from_hex(hash_hex)?, direction))
    }
}

/// Translate a whole legacy path, failing on the first malformed element
pub fn convert_legacy_path(path: &[LegacyProofElement]) -> Result<Vec<ProofElement>> {
    path.iter().map(LegacyProofElement::to_element).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::sha256;

    #[test]
    fn test_parse_keyed_elements() {
        let a = sha256(b"a").to_hex();
        let b = sha256(b"b").to_hex();
        let json = format!(r#"[{{"left": "{a}"}}, {{"right": "{b}"}}]"#);
        let legacy: Vec<LegacyProofElement> = serde_json::from_str(&json).unwrap();
        let path = convert_legacy_path(&legacy).unwrap();

        assert_eq!(path[0], ProofElement::new(sha256(b"a"), Direction::Left));
        assert_eq!(path[1], ProofElement::new(sha256(b"b"), Direction::Right));
    }

    #[test]
    fn test_parse_positioned_elements() {
        let a = sha256(b"a").to_hex();
        let json = format!(r#"[["{a}", 0], ["{a}", 1], ["{a}", "Left"], ["{a}", "right"]]"#);
        let legacy: Vec<LegacyProofElement> = serde_json::from_str(&json).unwrap();
        let directions: Vec<Direction> = convert_legacy_path(&legacy)
            .unwrap()
            .into_iter()
            .map(|e| e.direction)
            .collect();

        assert_eq!(
            directions,
            vec![Direction::Left, Direction::Right, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn test_invalid_position_is_malformed() {
        let a = sha256(b"a").to_hex();
        let bad_code = LegacyProofElement::Positioned(a.clone(), LegacyPosition::Code(7));
        let bad_name = LegacyProofElement::Positioned(a, LegacyPosition::Name("up".into()));

        for element in [bad_code, bad_name] {
            assert!(matches!(
                element.to_element(),
                Err(MerkleError::MalformedEncoding { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_hex_is_malformed() {
        let err = LegacyProofElement::left("xyz").to_element().unwrap_err();
        assert!(matches!(err, MerkleError::MalformedEncoding { .. }));
    }
}
