//! The Ledger: an ordered, hash-linked, append-only chain of blocks.
//!
//! The ledger owns its store and is the only writer. Appends are serialized
//! by an async mutex held across read-tip → seal → insert → validate, so two
//! appends can never seal against the same tip. Readers go straight to the
//! store and only ever see fully sealed blocks.

use std::sync::Arc;

use tokio::sync::Mutex;

use star_ledger_core::{
    validate_chain, Block, BlockBody, BlockHash, ChainError, StarClaim, WalletAddress,
};
use star_ledger_store::{BlockStore, InsertResult, StoreExt};

use crate::clock::{Clock, SystemClock};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, Result};

/// The main Ledger struct.
///
/// Provides:
/// - Genesis seeding on open
/// - Linked, serialized appends
/// - Lookups by hash, height and owner
/// - Full-chain validation
pub struct Ledger<S: BlockStore> {
    /// The storage backend.
    store: Arc<S>,
    /// Source of block times.
    clock: Arc<dyn Clock>,
    /// Configuration.
    config: LedgerConfig,
    /// Single-writer guard for appends.
    append_lock: Mutex<()>,
}

impl<S: BlockStore> Ledger<S> {
    /// Open a ledger over a store, seeding the genesis block if the store is empty.
    pub async fn open(store: S, config: LedgerConfig) -> Result<Self> {
        Self::open_with_clock(store, config, Arc::new(SystemClock)).await
    }

    /// Open a ledger with an explicit clock.
    pub async fn open_with_clock(
        store: S,
        config: LedgerConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let ledger = Self {
            store: Arc::new(store),
            clock,
            config,
            append_lock: Mutex::new(()),
        };

        if ledger.store.is_empty().await? {
            let body = BlockBody::new(ledger.config.genesis_body.clone().into_bytes());
            let genesis = ledger.append(body).await?;
            tracing::info!(hash = %genesis.hash, "genesis block seeded");
        }

        Ok(ledger)
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Current time according to the ledger's clock.
    pub fn now_secs(&self) -> i64 {
        self.clock.now_secs()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Write Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a block carrying `body` at the tip.
    ///
    /// Assigns height, time, previous-block link and hash, inserts the block,
    /// then re-validates the whole chain. A validation failure leaves the
    /// block in place (the chain is append-only) and returns the errors.
    pub async fn append(&self, body: BlockBody) -> Result<Block> {
        let _writer = self.append_lock.lock().await;

        let height = self.store.len().await?;
        let previous_block_hash = self.store.tip().await?.map(|tip| tip.hash);
        let block = Block::seal(height, self.clock.now_secs(), previous_block_hash, body);

        match self.store.insert_block(&block).await? {
            InsertResult::Inserted => {}
            InsertResult::HeightConflict { expected } => {
                return Err(LedgerError::Conflict { height, expected });
            }
        }

        if self.config.validate_on_append {
            let errors = self.validate().await?;
            if !errors.is_empty() {
                tracing::warn!(
                    height,
                    errors = errors.len(),
                    "chain validation failed after append"
                );
                return Err(LedgerError::ValidationFailure(errors));
            }
        }

        tracing::info!(height, hash = %block.hash, "block appended");
        Ok(block)
    }

    /// Append a star claim.
    pub async fn append_claim(&self, claim: &StarClaim) -> Result<Block> {
        let body = BlockBody::from_claim(claim)?;
        self.append(body).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Height of the tip; `-1` only if the store holds no blocks.
    pub async fn height(&self) -> Result<i64> {
        Ok(self.store.height().await?)
    }

    /// Number of blocks in the chain.
    pub async fn len(&self) -> Result<u64> {
        Ok(self.store.len().await?)
    }

    /// The block at the tip.
    pub async fn tip(&self) -> Result<Block> {
        self.store.tip().await?.ok_or(LedgerError::EmptyChain)
    }

    /// Snapshot of the chain, ordered by height.
    pub async fn blocks(&self) -> Result<Vec<Block>> {
        Ok(self.store.blocks().await?)
    }

    /// Get a block by hash. Absence is `Ok(None)`.
    pub async fn find_by_hash(&self, hash: &BlockHash) -> Result<Option<Block>> {
        Ok(self.store.find_block_by_hash(hash).await?)
    }

    /// Get a block by height. Absence is `Ok(None)`.
    pub async fn find_by_height(&self, height: u64) -> Result<Option<Block>> {
        Ok(self.store.get_block(height).await?)
    }

    /// Every star claimed by `owner`, in chain order.
    ///
    /// Blocks whose body does not decode as a claim (the genesis block, at
    /// least) are skipped and reported in [`StarsByOwner::skipped`].
    pub async fn stars_by_owner(&self, owner: &WalletAddress) -> Result<StarsByOwner> {
        let mut result = StarsByOwner::default();

        for block in self.store.blocks().await? {
            match block.claim() {
                Ok(claim) if claim.owner == *owner => result.claims.push(claim),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(height = block.height, error = %e, "block body skipped");
                    result.skipped.push(SkippedBlock {
                        height: block.height,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(result)
    }

    /// Validate the whole chain. An empty list means the chain is valid.
    pub async fn validate(&self) -> Result<Vec<ChainError>> {
        let blocks = self.store.blocks().await?;
        Ok(validate_chain(&blocks))
    }
}

/// Result of [`Ledger::stars_by_owner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarsByOwner {
    /// Claims whose owner matched, in chain order.
    pub claims: Vec<StarClaim>,
    /// Blocks whose body could not be decoded.
    pub skipped: Vec<SkippedBlock>,
}

impl StarsByOwner {
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// A block that was not decodable as a star claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    pub height: u64,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use star_ledger_core::{ChainErrorKind, Star};
    use star_ledger_store::MemoryStore;

    const T0: i64 = 1736870400;

    async fn make_ledger() -> (Ledger<MemoryStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(T0));
        let ledger = Ledger::open_with_clock(MemoryStore::new(), LedgerConfig::default(), clock.clone())
            .await
            .unwrap();
        (ledger, clock)
    }

    fn make_claim(owner: &str, story: &str) -> StarClaim {
        StarClaim {
            owner: WalletAddress::new(owner),
            signature: "sig".into(),
            message: format!("{}:{}:starRegistry", owner, T0),
            star: Star::new("16h 29m 1.0s", "-26° 29' 24.9", story),
        }
    }

    #[tokio::test]
    async fn test_open_seeds_genesis() {
        let (ledger, _) = make_ledger().await;

        assert_eq!(ledger.height().await.unwrap(), 0);
        let genesis = ledger.find_by_height(0).await.unwrap().unwrap();
        assert_eq!(genesis.height, 0);
        assert_eq!(genesis.time, T0);
        assert!(genesis.previous_block_hash.is_none());
        assert_eq!(genesis.body, BlockBody::genesis());
        assert_eq!(genesis.hash, genesis.compute_hash());
    }

    #[tokio::test]
    async fn test_open_does_not_reseed() {
        let clock = Arc::new(ManualClock::new(T0));
        let store = MemoryStore::new();
        let genesis = Block::seal(0, 42, None, BlockBody::genesis());
        store.insert_block(&genesis).await.unwrap();

        let ledger = Ledger::open_with_clock(store, LedgerConfig::default(), clock)
            .await
            .unwrap();
        assert_eq!(ledger.len().await.unwrap(), 1);
        assert_eq!(ledger.tip().await.unwrap().time, 42);
    }

    #[tokio::test]
    async fn test_append_links_to_tip() {
        let (ledger, clock) = make_ledger().await;
        let genesis = ledger.tip().await.unwrap();

        clock.advance(10);
        let block = ledger
            .append_claim(&make_claim("alice", "first"))
            .await
            .unwrap();

        assert_eq!(block.height, 1);
        assert_eq!(block.time, T0 + 10);
        assert_eq!(block.previous_block_hash, Some(genesis.hash));
        assert!(block.validate());
        assert_eq!(ledger.height().await.unwrap(), 1);

        let next = ledger.append(BlockBody::new(b"raw".to_vec())).await.unwrap();
        assert_eq!(next.height, 2);
        assert_eq!(next.previous_block_hash, Some(block.hash));
    }

    #[tokio::test]
    async fn test_lookups() {
        let (ledger, _) = make_ledger().await;
        let block = ledger
            .append_claim(&make_claim("alice", "first"))
            .await
            .unwrap();

        assert_eq!(ledger.find_by_hash(&block.hash).await.unwrap(), Some(block.clone()));
        assert_eq!(ledger.find_by_height(1).await.unwrap(), Some(block));
        assert!(ledger.find_by_hash(&BlockHash::ZERO).await.unwrap().is_none());
        assert!(ledger.find_by_height(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stars_by_owner() {
        let (ledger, _) = make_ledger().await;
        ledger.append_claim(&make_claim("alice", "a1")).await.unwrap();
        ledger.append_claim(&make_claim("bob", "b1")).await.unwrap();
        ledger.append_claim(&make_claim("alice", "a2")).await.unwrap();

        let alice = ledger.stars_by_owner(&WalletAddress::new("alice")).await.unwrap();
        let stories: Vec<&str> = alice.claims.iter().map(|c| c.star.story.as_str()).collect();
        assert_eq!(stories, vec!["a1", "a2"]);

        // Genesis is skipped, not fatal
        assert_eq!(alice.skipped.len(), 1);
        assert_eq!(alice.skipped[0].height, 0);

        let carol = ledger.stars_by_owner(&WalletAddress::new("carol")).await.unwrap();
        assert!(carol.is_empty());
    }

    #[tokio::test]
    async fn test_stars_by_owner_counts_undecodable_bodies() {
        let (ledger, _) = make_ledger().await;
        ledger.append(BlockBody::new(vec![0xff, 0x00])).await.unwrap();
        ledger.append_claim(&make_claim("alice", "a1")).await.unwrap();

        let alice = ledger.stars_by_owner(&WalletAddress::new("alice")).await.unwrap();
        assert_eq!(alice.len(), 1);
        let skipped: Vec<u64> = alice.skipped.iter().map(|s| s.height).collect();
        assert_eq!(skipped, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_validate_detects_tampering() {
        let (ledger, _) = make_ledger().await;
        ledger.append_claim(&make_claim("alice", "a1")).await.unwrap();
        ledger.append_claim(&make_claim("alice", "a2")).await.unwrap();
        assert!(ledger.validate().await.unwrap().is_empty());

        let forged = BlockBody::from_claim(&make_claim("mallory", "a1")).unwrap();
        ledger
            .store()
            .tamper_block(1, |b| b.body = forged)
            .unwrap();

        let errors = ledger.validate().await.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ChainErrorKind::SelfHashMismatch);
        assert_eq!(errors[0].block_height, 1);
    }

    #[tokio::test]
    async fn test_append_onto_corrupted_chain_fails() {
        let (ledger, _) = make_ledger().await;
        ledger.append_claim(&make_claim("alice", "a1")).await.unwrap();
        ledger
            .store()
            .tamper_block(1, |b| b.time += 1)
            .unwrap();

        let err = ledger
            .append_claim(&make_claim("bob", "b1"))
            .await
            .unwrap_err();
        let errors = err.chain_errors().unwrap();
        assert!(errors.iter().any(|e| e.block_height == 1 && e.is_self_hash()));

        // Append-only: the block stays even though validation failed.
        assert_eq!(ledger.height().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_validate_on_append_disabled() {
        let config = LedgerConfig {
            validate_on_append: false,
            ..LedgerConfig::default()
        };
        let ledger = Ledger::open(MemoryStore::new(), config).await.unwrap();
        ledger.append_claim(&make_claim("alice", "a1")).await.unwrap();
        ledger.store().tamper_block(1, |b| b.time += 1).unwrap();

        assert!(ledger.append_claim(&make_claim("bob", "b1")).await.is_ok());
        assert_eq!(ledger.validate().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_custom_genesis_body() {
        let config = LedgerConfig {
            genesis_body: "First light".into(),
            ..LedgerConfig::default()
        };
        let ledger = Ledger::open(MemoryStore::new(), config).await.unwrap();
        let genesis = ledger.tip().await.unwrap();
        assert_eq!(genesis.body.as_bytes(), b"First light");
    }
}
