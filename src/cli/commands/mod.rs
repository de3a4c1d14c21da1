//! CLI command implementations

pub mod export;
pub mod prove;
pub mod root;
pub mod verify;
