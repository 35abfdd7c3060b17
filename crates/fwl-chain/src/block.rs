use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canonical::block_digest;
use crate::error::ChainError;

/// Event payload carried by a block: an arbitrary JSON object.
///
/// The ledger treats payload contents as opaque; callers decide the shape.
pub type Payload = Map<String, Value>;

/// `prev_hash` of the genesis block: 64 zero characters, meaning "no parent".
pub const GENESIS_PREV_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// One immutable record in the audit chain.
///
/// Field order here is the persisted order; the store file is meant to be
/// readable by humans, so it stays stable.
///
/// A block moves through three states: *pending* (built by [`Block::candidate`],
/// hash empty), optionally *mining* (inside [`Block::seal`] with a non-zero
/// difficulty), and *sealed* (hash fixed). A sealed block is never modified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; genesis is 0, each successor adds 1.
    pub index: u64,
    /// Seconds since the Unix epoch at creation time. Genesis uses a fixed
    /// 0.0 so it is byte-for-byte reproducible.
    pub timestamp: f64,
    /// The caller-supplied event payload.
    pub data: Payload,
    /// Hex hash of the immediately preceding block.
    pub prev_hash: String,
    /// Proof-of-work counter; stays 0 unless the block was mined.
    pub nonce: u64,
    /// SHA-256 hex digest of the canonical encoding of the fields above.
    pub hash: String,
}

impl Block {
    /// Build a pending block: all linkage fields set, `nonce` 0, hash unset.
    pub fn candidate(index: u64, timestamp: f64, data: Payload, prev_hash: String) -> Self {
        Self {
            index,
            timestamp,
            data,
            prev_hash,
            nonce: 0,
            hash: String::new(),
        }
    }

    /// Seal the block by fixing its hash.
    ///
    /// With `difficulty == 0` the first digest is accepted and the nonce is
    /// left untouched. With `difficulty > 0` the nonce is incremented
    /// linearly until the hex digest carries `difficulty` leading `'0'`
    /// characters. The search is unbounded; callers that opt into mining own
    /// any timeout policy.
    pub fn seal(mut self, difficulty: u32) -> Result<Block, ChainError> {
        let target = "0".repeat(difficulty as usize);
        loop {
            let digest = block_digest(&self)?;
            if digest.starts_with(&target) {
                self.hash = digest;
                return Ok(self);
            }
            self.nonce += 1;
        }
    }

    /// Whether the hash satisfies a leading-zero proof-of-work constraint.
    pub fn meets_difficulty(&self, difficulty: u32) -> bool {
        self.hash.chars().take_while(|c| *c == '0').count() >= difficulty as usize
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }
}
