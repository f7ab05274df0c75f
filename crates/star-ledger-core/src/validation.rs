//! Chain validation: self-hash checks and predecessor linkage.

use crate::block::Block;
use crate::crypto::BlockHash;
use crate::error::ChainError;

/// Find the first block with the given hash.
pub fn find_by_hash<'a>(blocks: &'a [Block], hash: &BlockHash) -> Option<&'a Block> {
    blocks.iter().find(|b| b.hash == *hash)
}

/// Validate a single block against its own hash.
pub fn validate_block(block: &Block) -> Result<(), ChainError> {
    let computed = block.compute_hash();
    if computed != block.hash {
        return Err(ChainError::self_hash(
            block.height,
            format!("stored {} but computed {}", block.hash, computed),
        ));
    }
    Ok(())
}

/// Validate the link from a block to its predecessor.
///
/// The predecessor is looked up by `previous_block_hash` among `blocks`.
pub fn validate_link(blocks: &[Block], block: &Block) -> Result<(), ChainError> {
    let Some(prev_hash) = block.previous_block_hash else {
        return Err(ChainError::link(block.height, "missing previous block hash"));
    };

    let Some(prev) = find_by_hash(blocks, &prev_hash) else {
        return Err(ChainError::link(
            block.height,
            format!("predecessor {} not found", prev_hash),
        ));
    };

    if prev.height + 1 != block.height {
        return Err(ChainError::link(
            block.height,
            format!(
                "previous block hash {} resolves to height {}",
                prev_hash, prev.height
            ),
        ));
    }

    Ok(())
}

/// Validate a whole chain, tip first.
///
/// Every block gets a self-hash check; every block above height 0 also gets
/// a linkage check. An empty result means the chain is valid.
pub fn validate_chain(blocks: &[Block]) -> Vec<ChainError> {
    let mut errors = Vec::new();

    for block in blocks.iter().rev() {
        if let Err(e) = validate_block(block) {
            errors.push(e);
        }
        if block.height > 0 {
            if let Err(e) = validate_link(blocks, block) {
                errors.push(e);
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockBody;
    use crate::error::ChainErrorKind;

    fn make_chain(len: u64) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        for height in 0..len {
            let body = if height == 0 {
                BlockBody::genesis()
            } else {
                BlockBody::new(format!("block {}", height).into_bytes())
            };
            let prev = blocks.last().map(|b| b.hash);
            blocks.push(Block::seal(height, 1736870400 + height as i64, prev, body));
        }
        blocks
    }

    #[test]
    fn test_valid_chain() {
        assert!(validate_chain(&make_chain(1)).is_empty());
        assert!(validate_chain(&make_chain(5)).is_empty());
    }

    #[test]
    fn test_empty_chain_is_valid() {
        assert!(validate_chain(&[]).is_empty());
    }

    #[test]
    fn test_tampered_body() {
        let mut blocks = make_chain(4);
        blocks[2].body = BlockBody::new(b"rewritten".to_vec());

        let errors = validate_chain(&blocks);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ChainErrorKind::SelfHashMismatch);
        assert_eq!(errors[0].block_height, 2);
    }

    #[test]
    fn test_tampered_genesis() {
        let mut blocks = make_chain(3);
        blocks[0].body = BlockBody::new(b"Not Genesis".to_vec());

        let errors = validate_chain(&blocks);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_self_hash());
        assert_eq!(errors[0].block_height, 0);
    }

    #[test]
    fn test_dangling_previous_hash() {
        let mut blocks = make_chain(4);
        blocks[3].previous_block_hash = Some(BlockHash::from_bytes([0xee; 32]));

        let errors = validate_chain(&blocks);
        assert!(errors
            .iter()
            .any(|e| e.kind == ChainErrorKind::LinkMismatch && e.block_height == 3));
        // The hash covers the link, so the block also fails its self-check.
        assert!(errors
            .iter()
            .any(|e| e.kind == ChainErrorKind::SelfHashMismatch && e.block_height == 3));
    }

    #[test]
    fn test_resealed_block_with_bad_link() {
        // A block re-sealed over a bogus link passes its self-check but not linkage.
        let mut blocks = make_chain(3);
        let b = blocks[2].clone();
        blocks[2] = Block::seal(b.height, b.time, Some(BlockHash::ZERO), b.body.clone());

        let errors = validate_chain(&blocks);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_link());
        assert_eq!(errors[0].block_height, 2);
    }

    #[test]
    fn test_link_to_wrong_height() {
        let mut blocks = make_chain(4);
        let genesis_hash = blocks[0].hash;
        let b = blocks[3].clone();
        blocks[3] = Block::seal(b.height, b.time, Some(genesis_hash), b.body.clone());

        let errors = validate_chain(&blocks);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_link());
        assert_eq!(errors[0].block_height, 3);
    }

    #[test]
    fn test_errors_reported_tip_first() {
        let mut blocks = make_chain(5);
        blocks[1].body = BlockBody::new(b"x".to_vec());
        blocks[4].body = BlockBody::new(b"y".to_vec());

        let heights: Vec<u64> = validate_chain(&blocks).iter().map(|e| e.block_height).collect();
        assert_eq!(heights, vec![4, 1]);
    }

    #[test]
    fn test_find_by_hash() {
        let blocks = make_chain(3);
        let found = find_by_hash(&blocks, &blocks[1].hash).unwrap();
        assert_eq!(found.height, 1);
        assert!(find_by_hash(&blocks, &BlockHash::ZERO).is_none());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn chain_from_bodies(bodies: &[Vec<u8>]) -> Vec<Block> {
            let mut blocks = vec![Block::seal(0, 0, None, BlockBody::genesis())];
            for (i, body) in bodies.iter().enumerate() {
                let prev = blocks.last().map(|b| b.hash);
                blocks.push(Block::seal(i as u64 + 1, i as i64, prev, BlockBody::new(body.clone())));
            }
            blocks
        }

        proptest! {
            #[test]
            fn prop_linked_chains_validate(
                bodies in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..16)
            ) {
                prop_assert!(validate_chain(&chain_from_bodies(&bodies)).is_empty());
            }

            #[test]
            fn prop_dropping_a_block_breaks_the_link(
                bodies in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 2..16),
                pick in any::<prop::sample::Index>(),
            ) {
                let mut blocks = chain_from_bodies(&bodies);
                // Remove a non-genesis, non-tip block; its successor now dangles.
                let removed = 1 + pick.index(blocks.len() - 2);
                blocks.remove(removed);

                let errors = validate_chain(&blocks);
                prop_assert!(errors
                    .iter()
                    .any(|e| e.is_link() && e.block_height == removed as u64 + 1));
                prop_assert!(errors.iter().all(|e| e.is_link()));
            }
        }
    }
}
