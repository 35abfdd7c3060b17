use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tracing::{debug, warn};

use fwl_chain::{genesis, Block, ChainError, ChainVerifier, Payload};

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::store::ChainStore;

/// Outcome of a full-chain verification pass.
///
/// Integrity problems are findings, not errors: the caller decides whether
/// to alert, halt writes, or quarantine the file. `verify_chain` never
/// mutates the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    pub valid: bool,
    pub violation: Option<ChainError>,
}

impl VerifyReport {
    fn from_outcome(outcome: Result<(), ChainError>) -> Self {
        match outcome {
            Ok(()) => Self {
                valid: true,
                violation: None,
            },
            Err(violation) => Self {
                valid: false,
                violation: Some(violation),
            },
        }
    }

    /// Human-readable description of the first violation, if any.
    pub fn reason(&self) -> Option<String> {
        self.violation.as_ref().map(|v| v.to_string())
    }
}

/// The sole reader/writer of the persisted chain.
///
/// Every public operation takes the service-wide lock for its full duration
/// (load, mutate, persist), so no caller ever observes a chain mid-write and
/// no two appends interleave. This is coarse by design: the ledger is a
/// low-volume audit trail, and serializing everything buys a trivially
/// correct consistency story.
pub struct LedgerService {
    store: ChainStore,
    default_difficulty: u32,
    lock: Mutex<()>,
}

impl LedgerService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(LedgerConfig {
            path: path.into(),
            ..Default::default()
        })
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            store: ChainStore::new(config.path),
            default_difficulty: config.difficulty,
            lock: Mutex::new(()),
        }
    }

    /// Append a new block carrying `data` and return it sealed.
    ///
    /// Non-object payloads are rejected before any I/O. With `difficulty > 0`
    /// the call mines, and its latency is unbounded; callers own any timeout
    /// policy.
    pub fn append(&self, data: Value, difficulty: u32) -> Result<Block, LedgerError> {
        let payload = into_payload(data)?;
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        self.append_locked(payload, difficulty)
    }

    /// Append at the configured default difficulty.
    pub fn append_event(&self, data: Value) -> Result<Block, LedgerError> {
        let payload = into_payload(data)?;
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        self.append_locked(payload, self.default_difficulty)
    }

    /// Append a firewall event: the payload is the event tagged with
    /// `"type": "firewall_event"` (event keys win on collision), difficulty 0.
    /// This is the entry point the rest of the firewall system uses.
    pub fn log_event(&self, event: Value) -> Result<Block, LedgerError> {
        let event = into_payload(event)?;
        let mut payload = Payload::new();
        payload.insert(
            "type".to_string(),
            Value::String("firewall_event".to_string()),
        );
        payload.extend(event);
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        self.append_locked(payload, 0)
    }

    /// Defensive copy of the full chain.
    pub fn get_chain(&self) -> Result<Vec<Block>, LedgerError> {
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        self.store.load()
    }

    /// The tail block; genesis when the chain is fresh.
    pub fn get_last_block(&self) -> Result<Block, LedgerError> {
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        let chain = self.store.load()?;
        Ok(chain.last().cloned().unwrap_or_else(genesis))
    }

    /// Check every chain invariant against the persisted state.
    pub fn verify_chain(&self) -> Result<VerifyReport, LedgerError> {
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        let chain = self.store.load()?;
        Ok(VerifyReport::from_outcome(ChainVerifier::verify(&chain)))
    }

    /// DEV/TEST ONLY: unconditionally replace the store with a single
    /// genesis block. Never run this against a production store without
    /// explicit operator action.
    pub fn reset_to_genesis(&self) -> Result<(), LedgerError> {
        let _guard = self.lock.lock().expect("ledger mutex poisoned");
        warn!(path = %self.store.path().display(), "ledger reset to genesis");
        self.store.persist(&[genesis()])
    }

    fn append_locked(&self, payload: Payload, difficulty: u32) -> Result<Block, LedgerError> {
        let mut chain = self.store.load()?;
        let last = chain.last().cloned().unwrap_or_else(genesis);
        let block = Block::candidate(last.index + 1, unix_now(), payload, last.hash)
            .seal(difficulty)?;
        chain.push(block.clone());
        self.store.persist(&chain)?;
        debug!(index = block.index, hash = %block.hash, "appended ledger block");
        Ok(block)
    }
}

fn into_payload(data: Value) -> Result<Payload, LedgerError> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(LedgerError::InvalidPayload {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
