//! # Star Ledger Core
//!
//! Pure primitives for the star ledger: blocks, hashing, star claims and
//! chain validation.
//!
//! This crate contains no I/O, no storage, no locking. It is pure computation
//! over hash-linked records.
//!
//! ## Key Types
//!
//! - [`Block`] - An immutable, hash-linked ledger record
//! - [`BlockHash`] - Blake3 hash over a block's canonical header
//! - [`StarClaim`] - The ownership claim a wallet commits into a block body
//! - [`ChainError`] - A tagged integrity violation reported by validation
//! - [`SignatureVerifier`] - The seam for message-signature schemes
//!
//! ## Canonicalization
//!
//! Block hashes are computed over deterministic CBOR. See [`canonical`] module.

pub mod block;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod star;
pub mod types;
pub mod validation;

pub use block::{Block, BlockBody, GENESIS_BODY};
pub use canonical::canonical_header_bytes;
pub use crypto::{BlockHash, Ed25519Verifier, Keypair, SignatureVerifier};
pub use error::{ChainError, ChainErrorKind, CoreError};
pub use star::{Star, StarClaim};
pub use types::WalletAddress;
pub use validation::{validate_block, validate_chain, validate_link};
