//! # Star Ledger Store
//!
//! Storage abstraction for the star ledger. Provides a trait-based interface
//! for an ordered, append-only block sequence with an in-memory
//! implementation.
//!
//! ## Key Types
//!
//! - [`BlockStore`] - The async trait for all storage operations
//! - [`MemoryStore`] - RwLock-guarded in-memory storage
//! - [`InsertResult`] - Result of inserting a block
//!
//! ## Design Notes
//!
//! - **No persistence**: state lives for the lifetime of the process
//! - **Height discipline**: a block can only be inserted at the next free height
//! - **Atomic publication**: blocks are sealed before insertion, so readers
//!   never observe partially assigned fields

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{BlockStore, InsertResult, StoreExt};
