use std::path::PathBuf;

/// Configuration for a [`crate::LedgerService`].
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Path of the backing chain file.
    pub path: PathBuf,
    /// Proof-of-work difficulty applied by `append_event` (leading-zero hex
    /// characters). 0 disables mining, which is the expected production
    /// setting; mining latency grows exponentially with this value.
    pub difficulty: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ledger.json"),
            difficulty: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_mining() {
        let config = LedgerConfig::default();
        assert_eq!(config.difficulty, 0);
        assert_eq!(config.path, PathBuf::from("ledger.json"));
    }
}
