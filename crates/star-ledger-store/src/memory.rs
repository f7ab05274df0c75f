//! In-memory implementation of the BlockStore trait.
//!
//! All data is lost when the store is dropped.

use std::sync::RwLock;

use async_trait::async_trait;

use star_ledger_core::{Block, BlockHash};

use crate::error::Result;
use crate::traits::{BlockStore, InsertResult};

/// In-memory store implementation.
///
/// Thread-safe via RwLock. Readers run concurrently; an insert holds the
/// write lock only for the push of an already sealed block.
pub struct MemoryStore {
    blocks: RwLock<Vec<Block>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            blocks: RwLock::new(Vec::new()),
        }
    }

    /// Mutate a stored block in place, bypassing every ledger invariant.
    ///
    /// Exists so integrity checks can be exercised against a corrupted chain.
    /// Returns `false` if there is no block at `height`.
    #[cfg(any(test, feature = "test-util"))]
    pub fn tamper_block(&self, height: u64, f: impl FnOnce(&mut Block)) -> Result<bool> {
        let mut blocks = self.blocks.write()?;
        match blocks.get_mut(height as usize) {
            Some(block) => {
                f(block);
                tracing::warn!(height, "stored block tampered");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockStore for MemoryStore {
    async fn insert_block(&self, block: &Block) -> Result<InsertResult> {
        let mut blocks = self.blocks.write()?;

        let expected = blocks.len() as u64;
        if block.height != expected {
            return Ok(InsertResult::HeightConflict { expected });
        }

        blocks.push(block.clone());
        tracing::debug!(height = block.height, hash = %block.hash, "block inserted");

        Ok(InsertResult::Inserted)
    }

    async fn get_block(&self, height: u64) -> Result<Option<Block>> {
        let blocks = self.blocks.read()?;
        Ok(blocks.iter().find(|b| b.height == height).cloned())
    }

    async fn find_block_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        let blocks = self.blocks.read()?;
        Ok(blocks.iter().find(|b| b.hash == *hash).cloned())
    }

    async fn tip(&self) -> Result<Option<Block>> {
        let blocks = self.blocks.read()?;
        Ok(blocks.last().cloned())
    }

    async fn len(&self) -> Result<u64> {
        let blocks = self.blocks.read()?;
        Ok(blocks.len() as u64)
    }

    async fn blocks(&self) -> Result<Vec<Block>> {
        let blocks = self.blocks.read()?;
        Ok(blocks.clone())
    }
}
