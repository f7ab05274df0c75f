//! # Star Ledger
//!
//! An in-memory star registry: an append-only, hash-linked chain of blocks
//! where each block after genesis records a wallet's claim over a star.
//!
//! ## Overview
//!
//! - **Ledger**: Seeds genesis, serializes appends, answers lookups and
//!   validates the whole chain on demand
//! - **Registry**: Issues time-windowed ownership challenges and only lets a
//!   star in once the wallet has signed one
//!
//! ## Key Concepts
//!
//! - **Block**: Immutable once sealed. Its hash covers height, time, the
//!   previous block's hash and the body.
//! - **Challenge**: `address:issued_at:starRegistry`, redeemable for five
//!   minutes after issue.
//! - **Chain error**: A self-hash mismatch or a broken link, reported per
//!   block by [`Ledger::validate`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use star_ledger::{ChallengeConfig, Ledger, LedgerConfig, StarRegistry, StarSubmission};
//! use star_ledger::core::{Ed25519Verifier, Keypair, Star};
//! use star_ledger::store::MemoryStore;
//!
//! async fn example() {
//!     let ledger = Ledger::open(MemoryStore::new(), LedgerConfig::default())
//!         .await
//!         .unwrap();
//!     let registry = StarRegistry::new(Arc::new(ledger), Ed25519Verifier, ChallengeConfig::default());
//!
//!     // The wallet signs its challenge
//!     let wallet = Keypair::generate();
//!     let message = registry.issue_challenge(&wallet.address());
//!     let signature = wallet.sign_message(&message);
//!
//!     // and redeems it within the window
//!     let block = registry
//!         .redeem(StarSubmission {
//!             address: wallet.address(),
//!             message,
//!             signature,
//!             star: Star::new("16h 29m 1.0s", "-26° 29' 24.9", "First light"),
//!         })
//!         .await
//!         .unwrap();
//!     assert_eq!(block.height, 1);
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `star_ledger::core` - Core primitives (Block, BlockHash, StarClaim, etc.)
//! - `star_ledger::store` - Storage abstraction and the in-memory store

pub mod clock;
pub mod config;
pub mod error;
pub mod ledger;
pub mod registry;

// Re-export component crates
pub use star_ledger_core as core;
pub use star_ledger_store as store;

// Re-export main types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ChallengeConfig, LedgerConfig, DEFAULT_CHALLENGE_TAG, DEFAULT_CHALLENGE_WINDOW};
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, SkippedBlock, StarsByOwner};
pub use registry::{Challenge, StarRegistry, StarSubmission};

// Re-export commonly used core types
pub use star_ledger_core::{
    Block, BlockBody, BlockHash, ChainError, ChainErrorKind, Keypair, SignatureVerifier, Star,
    StarClaim, WalletAddress,
};
