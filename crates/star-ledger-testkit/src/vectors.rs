//! Golden test vectors for deterministic verification.
//!
//! Each vector pins the exact canonical CBOR bytes a block header must hash
//! over. Any change to the header encoding breaks these.

use star_ledger_core::{canonical_header_bytes, Block, BlockBody, BlockHash};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub height: u64,
    /// Seal time (Unix seconds).
    pub time: i64,
    /// Raw bytes of the previous block hash, if any.
    pub previous_block_hash: Option<[u8; 32]>,
    pub body: &'static [u8],
    /// Expected canonical header bytes (hex).
    pub expected_canonical_hex: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Genesis block",
            height: 0,
            time: 1736870400, // 2025-01-14T16:00:00Z
            previous_block_hash: None,
            body: b"Genesis Block",
            expected_canonical_hex: "a40000011a67868a0002f6034d47656e6573697320426c6f636b",
        },
        GoldenVector {
            name: "Linked block with hello body",
            height: 1,
            time: 1736870460,
            previous_block_hash: Some([0x11; 32]),
            body: b"hello",
            expected_canonical_hex: "a40001011a67868a3c025820\
                                     1111111111111111111111111111111111111111111111111111111111111111\
                                     034568656c6c6f",
        },
        GoldenVector {
            name: "Two-byte height, pre-epoch time, empty body",
            height: 24,
            time: -1,
            previous_block_hash: None,
            body: b"",
            expected_canonical_hex: "a4001818012002f60340",
        },
    ]
}

/// Seal a block from a golden vector.
pub fn block_from_vector(vector: &GoldenVector) -> Block {
    Block::seal(
        vector.height,
        vector.time,
        vector.previous_block_hash.map(BlockHash::from_bytes),
        BlockBody::new(vector.body.to_vec()),
    )
}

/// Check every vector's canonical bytes against the expected encoding.
///
/// Returns `(name, matches, actual_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let prev = v.previous_block_hash.map(BlockHash::from_bytes);
            let bytes = canonical_header_bytes(v.height, v.time, prev.as_ref(), v.body);
            let hex = hex::encode(bytes);
            (v.name.to_string(), hex == v.expected_canonical_hex, hex)
        })
        .collect()
}
