use crate::block::Block;
use crate::canonical::block_digest;
use crate::error::ChainError;
use crate::genesis::genesis;

/// Full-chain integrity verifier.
///
/// Checks, in order: the chain is non-empty, block 0 equals the canonical
/// genesis exactly, and for every later block the index increments by one,
/// the `prev_hash` links to the predecessor, and the stored hash matches a
/// freshly recomputed digest. The first violation wins; a `(true, none)`
/// outcome means every invariant held.
pub struct ChainVerifier;

impl ChainVerifier {
    pub fn verify(chain: &[Block]) -> Result<(), ChainError> {
        let Some(first) = chain.first() else {
            return Err(ChainError::Empty);
        };
        if *first != genesis() {
            return Err(ChainError::GenesisMismatch);
        }

        for i in 1..chain.len() {
            let prev = &chain[i - 1];
            let curr = &chain[i];

            if curr.index != i as u64 {
                return Err(ChainError::IndexMismatch {
                    position: i,
                    found: curr.index,
                });
            }
            if curr.prev_hash != prev.hash {
                return Err(ChainError::BrokenLink {
                    index: i,
                    expected: prev.hash.clone(),
                    actual: curr.prev_hash.clone(),
                });
            }
            let expected = block_digest(curr)?;
            if curr.hash != expected {
                return Err(ChainError::HashMismatch {
                    index: i,
                    expected,
                    actual: curr.hash.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::block::Payload;

    fn build_chain(count: usize) -> Vec<Block> {
        let mut chain = vec![genesis()];
        for i in 1..=count {
            let mut data = Payload::new();
            data.insert("seq".into(), Value::from(i));
            let last_hash = chain[i - 1].hash.clone();
            let block = Block::candidate(i as u64, 1000.0 + i as f64, data, last_hash)
                .seal(0)
                .unwrap();
            chain.push(block);
        }
        chain
    }

    #[test]
    fn freshly_built_chain_is_valid() {
        assert_eq!(ChainVerifier::verify(&build_chain(5)), Ok(()));
    }

    #[test]
    fn genesis_only_chain_is_valid() {
        assert_eq!(ChainVerifier::verify(&build_chain(0)), Ok(()));
    }

    #[test]
    fn empty_chain_is_rejected() {
        assert_eq!(ChainVerifier::verify(&[]), Err(ChainError::Empty));
    }

    #[test]
    fn modified_genesis_is_rejected() {
        let mut chain = build_chain(2);
        chain[0].timestamp = 1.0;
        assert_eq!(
            ChainVerifier::verify(&chain),
            Err(ChainError::GenesisMismatch)
        );
    }

    #[test]
    fn index_gap_is_reported_at_first_bad_position() {
        let mut chain = build_chain(3);
        chain[2].index = 5;
        assert_eq!(
            ChainVerifier::verify(&chain),
            Err(ChainError::IndexMismatch {
                position: 2,
                found: 5
            })
        );
    }

    #[test]
    fn broken_link_is_reported_with_both_hashes() {
        let mut chain = build_chain(3);
        chain[2].prev_hash = "f".repeat(64);
        let err = ChainVerifier::verify(&chain).unwrap_err();
        match err {
            ChainError::BrokenLink {
                index,
                expected,
                actual,
            } => {
                assert_eq!(index, 2);
                assert_eq!(expected, chain[1].hash);
                assert_eq!(actual, "f".repeat(64));
            }
            other => panic!("expected BrokenLink, got {other:?}"),
        }
    }

    #[test]
    fn tampered_payload_is_reported_as_hash_mismatch() {
        let mut chain = build_chain(3);
        chain[1]
            .data
            .insert("seq".into(), Value::from(999));
        let err = ChainVerifier::verify(&chain).unwrap_err();
        assert!(
            matches!(err, ChainError::HashMismatch { index: 1, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn tampered_nonce_is_reported_as_hash_mismatch() {
        let mut chain = build_chain(2);
        chain[1].nonce = 42;
        let err = ChainVerifier::verify(&chain).unwrap_err();
        assert!(matches!(err, ChainError::HashMismatch { index: 1, .. }));
    }

    #[test]
    fn first_violation_wins_over_later_ones() {
        let mut chain = build_chain(4);
        chain[1].prev_hash = "a".repeat(64);
        chain[3].nonce = 7;
        let err = ChainVerifier::verify(&chain).unwrap_err();
        assert!(matches!(err, ChainError::BrokenLink { index: 1, .. }));
    }

    #[test]
    fn rehashing_a_tampered_block_still_breaks_the_chain() {
        // Re-deriving a consistent hash for a tampered block passes its own
        // hash check but severs the link to the next block.
        let mut chain = build_chain(3);
        chain[1].data.insert("seq".into(), Value::from(999));
        chain[1].hash = block_digest(&chain[1]).unwrap();
        let err = ChainVerifier::verify(&chain).unwrap_err();
        assert!(matches!(err, ChainError::BrokenLink { index: 2, .. }));
    }
}
