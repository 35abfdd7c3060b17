use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use fwl_chain::{genesis, Block};

use crate::error::LedgerError;

/// Why a strict read of the store failed.
enum ReadFailure {
    /// The file does not exist yet (first use, not corruption).
    Missing,
    /// The file exists but is unusable: unreadable, undecodable, empty, or
    /// its first block is not the canonical genesis.
    Corrupt(String),
}

/// On-disk chain store: one pretty-printed JSON array of blocks.
///
/// The store is the single source of truth; callers re-read it on every
/// operation rather than caching a chain in memory, so an external process
/// restart never leaves a stale copy behind.
pub struct ChainStore {
    path: PathBuf,
}

impl ChainStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the chain, self-healing on any corruption.
    ///
    /// A missing file is first use and quietly creates the genesis chain. An
    /// unusable file is reset to genesis and logged at `warn`: from the audit
    /// trail's perspective a reset is equivalent to losing history, so
    /// operators must be able to alert on it.
    pub fn load(&self) -> Result<Vec<Block>, LedgerError> {
        match self.read_strict() {
            Ok(chain) => Ok(chain),
            Err(failure) => {
                match failure {
                    ReadFailure::Missing => {
                        debug!(path = %self.path.display(), "ledger store absent; creating genesis chain");
                    }
                    ReadFailure::Corrupt(reason) => {
                        warn!(path = %self.path.display(), %reason, "ledger store unusable; resetting to genesis");
                    }
                }
                let chain = vec![genesis()];
                self.persist(&chain)?;
                Ok(chain)
            }
        }
    }

    fn read_strict(&self) -> Result<Vec<Block>, ReadFailure> {
        if !self.path.exists() {
            return Err(ReadFailure::Missing);
        }
        let raw = fs::read(&self.path)
            .map_err(|e| ReadFailure::Corrupt(format!("unreadable store: {e}")))?;
        let chain: Vec<Block> = serde_json::from_slice(&raw)
            .map_err(|e| ReadFailure::Corrupt(format!("undecodable store: {e}")))?;
        match chain.first() {
            None => Err(ReadFailure::Corrupt("store holds an empty chain".to_string())),
            Some(first) if *first != genesis() => {
                Err(ReadFailure::Corrupt("genesis block mismatch".to_string()))
            }
            Some(_) => Ok(chain),
        }
    }

    /// Atomically replace the store with the given chain.
    ///
    /// Writes to a named temp file in the store's directory, syncs, then
    /// renames over the store path. A crash mid-write leaves the previous
    /// store intact; the rename is the only observable mutation.
    pub fn persist(&self, chain: &[Block]) -> Result<(), LedgerError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_vec_pretty(chain)
            .map_err(|e| LedgerError::Serialization(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| LedgerError::Io(e.error))?;
        Ok(())
    }
}
