//! Stateful ledger service for the firewall audit ledger.
//!
//! `fwl-chain` defines what a valid chain looks like; this crate owns the
//! one on disk. A [`LedgerService`] holds the backing-file path and a
//! process-wide lock, re-reads the file on every operation, self-heals a
//! corrupt store back to genesis, and persists through a temp-file-plus-
//! rename so the store is never observable half-written.
//!
//! # Design Rules
//!
//! 1. At most one ledger operation runs at a time, reads included.
//! 2. The file is the source of truth; no long-lived in-memory chain.
//! 3. A corrupt store is reset to genesis and logged, never surfaced as an
//!    error (availability over strict durability — operators must alert on
//!    the reset log line).
//! 4. Persist failures propagate; the rename is the only visible mutation.
//! 5. One writer process per file. Multi-process deployments need an
//!    external file lock.

pub mod config;
pub mod error;
pub mod service;
pub mod store;

pub use config::LedgerConfig;
pub use fwl_chain::Block;
pub use error::LedgerError;
pub use service::{LedgerService, VerifyReport};
pub use store::ChainStore;
