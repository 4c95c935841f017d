//! Ledger configuration.

use serde::{Deserialize, Serialize};

/// Default balance cap applied when none is configured.
pub const DEFAULT_MAX_BALANCE: i64 = 100_000;

/// Configuration for the ledger's balance rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Upper bound for any committed balance. A charge that would push a
    /// balance above this value is rejected whole.
    pub max_balance: i64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_balance: DEFAULT_MAX_BALANCE,
        }
    }
}
