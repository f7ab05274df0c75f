//! Store trait: the abstract interface for block storage.
//!
//! This trait keeps the ledger storage-agnostic. The shipped implementation
//! is in-memory; the ledger never persists anything.

use std::future::Future;

use async_trait::async_trait;
use star_ledger_core::{Block, BlockHash};

use crate::error::Result;

/// Result of inserting a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult {
    /// Block was appended at the tip.
    Inserted,
    /// The block's height is not the next free position.
    HeightConflict {
        /// The height the store expected next.
        expected: u64,
    },
}

/// The BlockStore trait: async interface for an ordered, append-only block sequence.
///
/// # Design Notes
///
/// - **Append-only**: blocks are inserted at the tip and never updated or removed.
/// - **Height-addressed**: the block at index `i` has height `i`; inserting any
///   other height returns `HeightConflict`.
/// - **Whole blocks only**: a block is visible to readers only after it is
///   fully sealed and inserted.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Append a sealed block.
    async fn insert_block(&self, block: &Block) -> Result<InsertResult>;

    /// Get the block at a height.
    async fn get_block(&self, height: u64) -> Result<Option<Block>>;

    /// Get the first block (lowest height) with the given hash.
    async fn find_block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>>;

    /// Get the block with the greatest height.
    async fn tip(&self) -> Result<Option<Block>>;

    /// Number of blocks stored.
    async fn len(&self) -> Result<u64>;

    /// Snapshot of all blocks, ordered by height.
    async fn blocks(&self) -> Result<Vec<Block>>;
}

/// Extension trait for common store patterns.
pub trait StoreExt: BlockStore {
    /// Height of the tip, or `-1` when the store is empty.
    fn height(&self) -> impl Future<Output = Result<i64>> + Send;

    /// Whether no block has been inserted yet.
    fn is_empty(&self) -> impl Future<Output = Result<bool>> + Send;
}

impl<S: BlockStore + ?Sized> StoreExt for S {
    async fn height(&self) -> Result<i64> {
        let len = self.len().await?;
        Ok(len as i64 - 1)
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
