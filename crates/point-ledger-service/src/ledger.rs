//! The ledger core: validated, per-user serialized balance mutations.

use std::sync::Arc;

use point_ledger_core::{
    LedgerConfig, LedgerError, PointHistory, TransactionType, UserId, UserPoint,
};
use point_ledger_store::{BalanceStore, HistoryStore};

use crate::locks::UserLocks;

/// The point ledger.
///
/// Charges and uses for one user run under that user's mutex from
/// [`UserLocks`], which makes each mutation's read-check-write-append
/// sequence atomic against other mutations for the same user. Balance and
/// history queries take no lock and observe committed state.
pub struct LedgerService {
    balances: Arc<dyn BalanceStore>,
    histories: Arc<dyn HistoryStore>,
    locks: UserLocks,
    config: LedgerConfig,
}

impl LedgerService {
    /// Create a ledger over the given stores.
    #[must_use]
    pub fn new(
        balances: Arc<dyn BalanceStore>,
        histories: Arc<dyn HistoryStore>,
        config: LedgerConfig,
    ) -> Self {
        Self {
            balances,
            histories,
            locks: UserLocks::default(),
            config,
        }
    }

    /// Current balance for a user. Users without a stored record report a
    /// zero balance; no record is created by reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance store fails.
    pub async fn get_balance(&self, user_id: UserId) -> Result<UserPoint, LedgerError> {
        self.current_record(user_id).await
    }

    /// Add `amount` points to a user's balance.
    ///
    /// Rejected whole with [`LedgerError::BalanceCapExceeded`] if the result
    /// would pass the configured cap; partial top-ups are never applied. On
    /// success the new record is returned and a charge entry is appended to
    /// the user's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive, the cap would be
    /// exceeded, or a store call fails.
    pub async fn charge(&self, user_id: UserId, amount: i64) -> Result<UserPoint, LedgerError> {
        validate_amount(amount)?;

        let _guard = self.locks.acquire(user_id).await;

        let current = self.current_record(user_id).await?;
        // Addition overflow folds into the cap check.
        let new_balance = current
            .point
            .checked_add(amount)
            .filter(|balance| *balance <= self.config.max_balance)
            .ok_or(LedgerError::BalanceCapExceeded {
                balance: current.point,
                amount,
                max_balance: self.config.max_balance,
            })?;

        let updated = self.balances.upsert(user_id, new_balance).await?;
        self.histories
            .append(user_id, amount, TransactionType::Charge, updated.updated_at)
            .await?;

        tracing::info!(
            user_id = %user_id,
            amount = amount,
            new_balance = updated.point,
            "Points charged"
        );

        Ok(updated)
    }

    /// Deduct `amount` points from a user's balance.
    ///
    /// Rejected whole with [`LedgerError::InsufficientBalance`] if the
    /// balance does not cover the amount; balances never go negative. On
    /// success the new record is returned and a use entry is appended to the
    /// user's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive, the balance is
    /// insufficient, or a store call fails.
    pub async fn use_points(&self, user_id: UserId, amount: i64) -> Result<UserPoint, LedgerError> {
        validate_amount(amount)?;

        let _guard = self.locks.acquire(user_id).await;

        let current = self.current_record(user_id).await?;
        if !current.covers(amount) {
            return Err(LedgerError::InsufficientBalance {
                balance: current.point,
                required: amount,
            });
        }

        let updated = self.balances.upsert(user_id, current.point - amount).await?;
        self.histories
            .append(user_id, amount, TransactionType::Use, updated.updated_at)
            .await?;

        tracing::info!(
            user_id = %user_id,
            amount = amount,
            new_balance = updated.point,
            "Points used"
        );

        Ok(updated)
    }

    /// All committed charge/use events for a user, in commit order. Users
    /// with no history get an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the history store fails.
    pub async fn get_history(&self, user_id: UserId) -> Result<Vec<PointHistory>, LedgerError> {
        Ok(self.histories.list_by_user(user_id).await?)
    }

    async fn current_record(&self, user_id: UserId) -> Result<UserPoint, LedgerError> {
        let record = self.balances.get(user_id).await?;
        Ok(record.unwrap_or_else(|| UserPoint::empty(user_id)))
    }
}

fn validate_amount(amount: i64) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount { amount });
    }
    Ok(())
}
