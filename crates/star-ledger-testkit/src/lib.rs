//! # Star Ledger Testkit
//!
//! Testing utilities for the star ledger.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known block headers with their expected canonical bytes
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Seeded wallets and a registry running on a manual clock
//!
//! ## Golden Vectors
//!
//! ```rust
//! use star_ledger_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for vector in all_vectors() {
//!     println!("{}: {}", vector.name, vector.expected_canonical_hex);
//! }
//! assert!(verify_all_vectors().iter().all(|(_, matches, _)| *matches));
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use star_ledger_testkit::generators::{block_from_params, BlockParams};
//!
//! proptest! {
//!     #[test]
//!     fn sealed_blocks_validate(params: BlockParams) {
//!         prop_assert!(block_from_params(&params).validate());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust,no_run
//! use star_ledger_testkit::fixtures::{sample_star, RegistryFixture, TestFixture};
//!
//! async fn example() {
//!     let env = RegistryFixture::new().await.unwrap();
//!     let wallet = TestFixture::with_seed([7; 32]);
//!     let block = env.register(&wallet, sample_star(0)).await.unwrap();
//!     assert_eq!(block.height, 1);
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, sample_star, RegistryFixture, TestFixture, FIXTURE_EPOCH};
pub use generators::{block_from_params, BlockParams};
pub use vectors::{all_vectors, block_from_vector, verify_all_vectors, GoldenVector};
