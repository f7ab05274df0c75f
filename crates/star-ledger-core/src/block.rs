//! Block: an immutable, hash-linked ledger record.
//!
//! A block is sealed exactly once, when the ledger appends it. Its hash
//! covers `height`, `time`, `previous_block_hash` and `body`.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_header_bytes, decode_claim, encode_claim};
use crate::crypto::BlockHash;
use crate::error::CoreError;
use crate::star::StarClaim;

/// The sentinel body of the genesis block.
pub const GENESIS_BODY: &str = "Genesis Block";

/// Opaque block payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockBody(pub Bytes);

impl BlockBody {
    /// Create a body from raw bytes.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// The genesis sentinel body.
    pub fn genesis() -> Self {
        Self(Bytes::from_static(GENESIS_BODY.as_bytes()))
    }

    /// Encode a star claim as a body.
    pub fn from_claim(claim: &StarClaim) -> Result<Self, CoreError> {
        Ok(Self(encode_claim(claim)?.into()))
    }

    /// Decode the body as a star claim.
    pub fn decode_claim(&self) -> Result<StarClaim, CoreError> {
        decode_claim(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A sealed block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain (0-based).
    pub height: u64,

    /// Seal time (Unix seconds).
    pub time: i64,

    /// Hash of the block at `height - 1` (None only for genesis).
    pub previous_block_hash: Option<BlockHash>,

    /// Hash over every other field.
    pub hash: BlockHash,

    /// The payload.
    pub body: BlockBody,
}

impl Block {
    /// Seal a block: compute its hash over the given fields.
    pub fn seal(
        height: u64,
        time: i64,
        previous_block_hash: Option<BlockHash>,
        body: BlockBody,
    ) -> Self {
        let hash = compute_hash(height, time, previous_block_hash.as_ref(), &body);
        Self {
            height,
            time,
            previous_block_hash,
            hash,
            body,
        }
    }

    /// Recompute the hash from the block's current fields.
    pub fn compute_hash(&self) -> BlockHash {
        compute_hash(
            self.height,
            self.time,
            self.previous_block_hash.as_ref(),
            &self.body,
        )
    }

    /// Check that the stored hash matches the recomputed one.
    pub fn validate(&self) -> bool {
        self.compute_hash() == self.hash
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.height == 0
    }

    /// Decode the body as a star claim.
    ///
    /// The genesis block never carries a claim.
    pub fn claim(&self) -> Result<StarClaim, CoreError> {
        if self.is_genesis() {
            return Err(CoreError::GenesisBody);
        }
        self.body.decode_claim()
    }
}

fn compute_hash(
    height: u64,
    time: i64,
    previous_block_hash: Option<&BlockHash>,
    body: &BlockBody,
) -> BlockHash {
    let bytes = canonical_header_bytes(height, time, previous_block_hash, body.as_bytes());
    BlockHash::hash(&bytes)
}
