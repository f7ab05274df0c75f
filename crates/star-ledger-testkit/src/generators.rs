//! Proptest generators for property-based testing.

use proptest::prelude::*;

use star_ledger_core::{Block, BlockBody, BlockHash, Keypair, Star, StarClaim, WalletAddress};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate a wallet address backed by a real keypair.
pub fn wallet_address() -> impl Strategy<Value = WalletAddress> {
    keypair().prop_map(|kp| kp.address())
}

/// Generate a random BlockHash.
pub fn block_hash() -> impl Strategy<Value = BlockHash> {
    any::<[u8; 32]>().prop_map(BlockHash::from_bytes)
}

/// Generate a reasonable seal time (Unix seconds).
pub fn time() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800
}

/// Generate body bytes of specified max length.
pub fn body(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a star with optional fields sometimes present.
pub fn star() -> impl Strategy<Value = Star> {
    (
        "[0-9]{1,2}h [0-9]{1,2}m [0-9]{1,2}\\.[0-9]s",
        "-?[0-9]{1,2}° [0-9]{1,2}' [0-9]{1,2}\\.[0-9]",
        ".{0,200}",
        proptest::option::of("[0-9]\\.[0-9]"),
        proptest::option::of("[A-Z][a-z]{2,12}"),
    )
        .prop_map(|(ra, dec, story, magnitude, constellation)| Star {
            ra,
            dec,
            magnitude,
            constellation,
            story,
        })
}

/// Generate a star claim. The signature is not checked by anything that
/// stores claims, so it is arbitrary hex.
pub fn star_claim() -> impl Strategy<Value = StarClaim> {
    (wallet_address(), time(), "[0-9a-f]{128}", star()).prop_map(
        |(owner, issued_at, signature, star)| StarClaim {
            message: format!("{}:{}:starRegistry", owner, issued_at),
            owner,
            signature,
            star,
        },
    )
}

/// Parameters for sealing a block.
#[derive(Debug, Clone)]
pub struct BlockParams {
    pub height: u64,
    pub time: i64,
    pub previous_block_hash: Option<BlockHash>,
    pub body: Vec<u8>,
}

impl Arbitrary for BlockParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            0u64..=1_000_000u64, // height
            time(),
            proptest::option::of(block_hash()),
            body(1000),
        )
            .prop_map(|(height, time, prev, body)| BlockParams {
                height,
                time,
                previous_block_hash: prev,
                body,
            })
            .boxed()
    }
}

/// Seal a block from parameters.
pub fn block_from_params(params: &BlockParams) -> Block {
    Block::seal(
        params.height,
        params.time,
        params.previous_block_hash,
        BlockBody::new(params.body.clone()),
    )
}
