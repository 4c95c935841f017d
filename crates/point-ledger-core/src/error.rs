//! Error types for the point ledger.

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur during ledger operations.
///
/// The rejection variants carry the figures the caller needs to explain the
/// refusal; the request that triggered them leaves balance and history
/// untouched.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A use requested more points than the balance holds.
    #[error("insufficient balance: {balance} available, {required} required")]
    InsufficientBalance {
        /// Balance at the time of the request.
        balance: i64,
        /// Points the request asked for.
        required: i64,
    },

    /// A charge would push the balance above the configured cap.
    #[error("balance cap exceeded: {balance} + {amount} > {max_balance}")]
    BalanceCapExceeded {
        /// Balance at the time of the request.
        balance: i64,
        /// Points the request asked for.
        amount: i64,
        /// The configured cap.
        max_balance: i64,
    },

    /// The requested amount was zero or negative.
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// The storage layer failed. Propagated unchanged; the ledger neither
    /// retries nor rolls back on behalf of the store.
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_carry_figures() {
        let err = LedgerError::InsufficientBalance {
            balance: 10,
            required: 30,
        };
        assert_eq!(
            err.to_string(),
            "insufficient balance: 10 available, 30 required"
        );

        let err = LedgerError::BalanceCapExceeded {
            balance: 90,
            amount: 20,
            max_balance: 100,
        };
        assert_eq!(err.to_string(), "balance cap exceeded: 90 + 20 > 100");

        let err = LedgerError::InvalidAmount { amount: -5 };
        assert_eq!(err.to_string(), "invalid amount: -5");
    }
}
