use fwl_chain::ChainError;

/// Errors surfaced by ledger operations.
///
/// Store corruption is deliberately absent: `load` self-heals it instead of
/// reporting it (see the crate docs). Integrity violations are returned
/// inside [`crate::service::VerifyReport`], never as an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// `append`/`log_event` called with something other than a JSON object.
    /// Rejected before any I/O.
    #[error("ledger payload must be a JSON object, got {found}")]
    InvalidPayload { found: &'static str },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Chain(#[from] ChainError),
}
