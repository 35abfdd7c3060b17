//! Block and chain model for the firewall audit ledger.
//!
//! This crate defines the pure data layer: what a block looks like, how its
//! hash is computed, and what makes a chain of blocks valid. It performs no
//! I/O; persistence and locking live in `fwl-ledger`.
//!
//! # Key Types
//!
//! - [`Block`] — one immutable audit record, hash-linked to its predecessor
//! - [`Payload`] — the caller-supplied JSON object carried by a block
//! - [`ChainVerifier`] — full-chain integrity check, first violation wins
//! - [`ChainError`] — digest failures and integrity violations
//!
//! # Hashing Rules
//!
//! A block's hash is the SHA-256 of a canonical JSON encoding of its
//! `index`, `timestamp`, `data`, `prev_hash`, and `nonce` fields: compact
//! separators, object keys sorted at every nesting level. The same logical
//! field values always produce the same digest, which is what lets
//! verification recompute hashes long after the blocks were written.

pub mod block;
pub mod canonical;
pub mod error;
pub mod genesis;
pub mod verify;

pub use block::{Block, Payload, GENESIS_PREV_HASH};
pub use canonical::{block_digest, canonical_bytes, sha256_hex};
pub use error::ChainError;
pub use genesis::{genesis, GENESIS_HASH, GENESIS_TIMESTAMP};
pub use verify::ChainVerifier;
