//! Balance records for the point ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// A user's current point balance.
///
/// One record exists per user. Reads for a user with no stored record observe
/// the zero record from [`UserPoint::empty`]; writes always replace the whole
/// record, so concurrent readers see either the old or the new balance, never
/// a partial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPoint {
    /// The user this balance belongs to.
    pub id: UserId,

    /// Current balance in points. Kept within `0..=max_balance` by the
    /// ledger's charge and use paths.
    pub point: i64,

    /// When the balance last changed.
    pub updated_at: DateTime<Utc>,
}

impl UserPoint {
    /// Create a balance record.
    #[must_use]
    pub fn new(id: UserId, point: i64, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            point,
            updated_at,
        }
    }

    /// The zero-balance record reported for users with no stored balance.
    #[must_use]
    pub fn empty(id: UserId) -> Self {
        Self {
            id,
            point: 0,
            updated_at: Utc::now(),
        }
    }

    /// Check if the balance covers a deduction of `amount` points.
    #[must_use]
    pub const fn covers(&self, amount: i64) -> bool {
        self.point >= amount
    }
}
