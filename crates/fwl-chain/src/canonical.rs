use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::block::Block;
use crate::error::ChainError;

/// Canonical byte encoding of a block's hashed fields.
///
/// Covers exactly `index`, `timestamp`, `data`, `prev_hash`, and `nonce` —
/// never the block's own `hash`. The encoding is compact JSON with object
/// keys sorted at every nesting level (`serde_json`'s map is BTree-backed,
/// so sorting falls out of serialization; the `preserve_order` feature must
/// stay off). Two blocks with the same logical field values always encode
/// to identical bytes, regardless of payload key insertion order.
pub fn canonical_bytes(block: &Block) -> Result<Vec<u8>, ChainError> {
    let mut header = Map::new();
    header.insert("index".to_string(), Value::from(block.index));
    header.insert("timestamp".to_string(), Value::from(block.timestamp));
    header.insert("data".to_string(), Value::Object(block.data.clone()));
    header.insert("prev_hash".to_string(), Value::from(block.prev_hash.as_str()));
    header.insert("nonce".to_string(), Value::from(block.nonce));
    serde_json::to_vec(&Value::Object(header))
        .map_err(|e| ChainError::Serialization(e.to_string()))
}

/// SHA-256 of raw bytes as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// The digest a block's `hash` field must hold: SHA-256 over the canonical
/// encoding of its other fields.
pub fn block_digest(block: &Block) -> Result<String, ChainError> {
    Ok(sha256_hex(&canonical_bytes(block)?))
}
