use thiserror::Error;

/// Digest failures and chain integrity violations.
///
/// Verification returns the first violation found, carrying the offending
/// index and the expected/actual values so operators can diagnose exactly
/// where a chain broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("chain is empty; a valid chain starts with the genesis block")]
    Empty,

    #[error("genesis mismatch: block 0 does not equal the canonical genesis block")]
    GenesisMismatch,

    #[error("index mismatch at position {position}: expected {position}, found {found}")]
    IndexMismatch { position: usize, found: u64 },

    #[error("broken link at index {index}: prev_hash {actual} does not match previous block hash {expected}")]
    BrokenLink {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("hash mismatch at index {index}: expected {expected}, got {actual}")]
    HashMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}
