use std::sync::LazyLock;

use serde_json::Value;

use crate::block::{Block, Payload, GENESIS_PREV_HASH};

/// Fixed genesis timestamp. A constant (rather than wall-clock time) keeps
/// the genesis block byte-for-byte reproducible across deployments.
pub const GENESIS_TIMESTAMP: f64 = 0.0;

/// SHA-256 of the canonical genesis encoding. Published as a constant so two
/// independent writers agree on block 0 without talking to each other; a
/// test re-derives it from [`crate::canonical::block_digest`].
pub const GENESIS_HASH: &str =
    "90b4850498335facd7266653e9526e78091b8e3767f45d0cc9d8d1a6240d7993";

static GENESIS: LazyLock<Block> = LazyLock::new(|| {
    let mut data = Payload::new();
    data.insert("genesis".to_string(), Value::Bool(true));
    Block {
        index: 0,
        timestamp: GENESIS_TIMESTAMP,
        data,
        prev_hash: GENESIS_PREV_HASH.to_string(),
        nonce: 0,
        hash: GENESIS_HASH.to_string(),
    }
});

/// The canonical genesis block.
pub fn genesis() -> Block {
    GENESIS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{block_digest, canonical_bytes};

    #[test]
    fn genesis_hash_constant_matches_recomputed_digest() {
        assert_eq!(block_digest(&genesis()).unwrap(), GENESIS_HASH);
    }

    #[test]
    fn genesis_canonical_encoding_is_the_published_form() {
        let expected = format!(
            "{{\"data\":{{\"genesis\":true}},\"index\":0,\"nonce\":0,\
             \"prev_hash\":\"{GENESIS_PREV_HASH}\",\"timestamp\":0.0}}"
        );
        assert_eq!(
            String::from_utf8(canonical_bytes(&genesis()).unwrap()).unwrap(),
            expected
        );
    }

    #[test]
    fn genesis_is_identical_across_callers() {
        assert_eq!(genesis(), genesis());
    }

    #[test]
    fn genesis_has_no_parent() {
        let block = genesis();
        assert!(block.is_genesis());
        assert_eq!(block.prev_hash, GENESIS_PREV_HASH);
        assert_eq!(block.nonce, 0);
    }
}
