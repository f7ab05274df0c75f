//! Error types for the ledger.

use star_ledger_core::{ChainError, CoreError};
use star_ledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur during ledger and registry operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The block was appended, but the chain failed validation afterwards.
    #[error("chain validation failed after append ({} error(s))", .0.len())]
    ValidationFailure(Vec<ChainError>),

    /// The ownership challenge is older than the validity window.
    #[error("ownership challenge expired: issued {elapsed_secs}s ago")]
    Expired { elapsed_secs: i64 },

    /// The signature verifier rejected the submission.
    #[error("signature verification failed")]
    BadSignature,

    /// The challenge message is not `address:timestamp:tag`.
    #[error("malformed ownership challenge: {0}")]
    MalformedChallenge(String),

    /// Another block already occupies the height this append computed.
    #[error("height conflict: tried height {height}, store expected {expected}")]
    Conflict { height: u64, expected: u64 },

    /// The store holds no blocks.
    #[error("ledger has no blocks")]
    EmptyChain,

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Encoding or decoding error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

impl LedgerError {
    /// The chain errors attached to a validation failure.
    pub fn chain_errors(&self) -> Option<&[ChainError]> {
        match self {
            LedgerError::ValidationFailure(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
