//! Error types for the star ledger core.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core errors that can occur while hashing, signing, or decoding blocks.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("block body is the genesis sentinel, not a star claim")]
    GenesisBody,

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

/// Which integrity check a block failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainErrorKind {
    /// The stored hash does not match the hash recomputed from the block's fields.
    SelfHashMismatch,
    /// The block's `previous_block_hash` does not resolve to its predecessor.
    LinkMismatch,
}

impl fmt::Display for ChainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainErrorKind::SelfHashMismatch => write!(f, "self-hash mismatch"),
            ChainErrorKind::LinkMismatch => write!(f, "link mismatch"),
        }
    }
}

/// A single integrity violation found by chain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} at height {block_height}: {detail}")]
pub struct ChainError {
    pub kind: ChainErrorKind,
    pub block_height: u64,
    pub detail: String,
}

impl ChainError {
    pub fn self_hash(block_height: u64, detail: impl Into<String>) -> Self {
        Self {
            kind: ChainErrorKind::SelfHashMismatch,
            block_height,
            detail: detail.into(),
        }
    }

    pub fn link(block_height: u64, detail: impl Into<String>) -> Self {
        Self {
            kind: ChainErrorKind::LinkMismatch,
            block_height,
            detail: detail.into(),
        }
    }

    pub fn is_self_hash(&self) -> bool {
        self.kind == ChainErrorKind::SelfHashMismatch
    }

    pub fn is_link(&self) -> bool {
        self.kind == ChainErrorKind::LinkMismatch
    }
}
