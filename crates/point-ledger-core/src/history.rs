//! History entries for the point ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{HistoryId, UserId};

/// One committed charge or use event.
///
/// Every successful balance mutation appends exactly one entry; rejected
/// requests append nothing. Entries are never updated or removed, so a user's
/// history replays to their balance trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointHistory {
    /// Entry id, assigned by the history store in append order.
    pub id: HistoryId,

    /// The user whose balance changed.
    pub user_id: UserId,

    /// Whether points were charged or used.
    pub transaction_type: TransactionType,

    /// Magnitude of the change, always positive.
    pub amount: i64,

    /// When the mutation committed. Matches the `updated_at` of the balance
    /// write it records.
    pub timestamp: DateTime<Utc>,
}

impl PointHistory {
    /// Create a history entry.
    #[must_use]
    pub fn new(
        id: HistoryId,
        user_id: UserId,
        transaction_type: TransactionType,
        amount: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            transaction_type,
            amount,
            timestamp,
        }
    }

    /// The signed balance change this entry represents: positive for a
    /// charge, negative for a use.
    #[must_use]
    pub const fn signed_amount(&self) -> i64 {
        match self.transaction_type {
            TransactionType::Charge => self.amount,
            TransactionType::Use => -self.amount,
        }
    }
}

/// Type of balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Points added to a balance.
    Charge,
    /// Points deducted from a balance.
    Use,
}

impl TransactionType {
    /// Check if this transaction type increases the balance.
    #[must_use]
    pub const fn is_charge(&self) -> bool {
        matches!(self, Self::Charge)
    }

    /// Check if this transaction type decreases the balance.
    #[must_use]
    pub const fn is_use(&self) -> bool {
        matches!(self, Self::Use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_direction() {
        assert!(TransactionType::Charge.is_charge());
        assert!(!TransactionType::Charge.is_use());

        assert!(TransactionType::Use.is_use());
        assert!(!TransactionType::Use.is_charge());
    }

    #[test]
    fn transaction_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Charge).unwrap(),
            "\"charge\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Use).unwrap(),
            "\"use\""
        );
    }

    #[test]
    fn signed_amount_follows_direction() {
        let charge = PointHistory::new(
            HistoryId::new(1),
            UserId::new(1),
            TransactionType::Charge,
            50,
            Utc::now(),
        );
        let usage = PointHistory::new(
            HistoryId::new(2),
            UserId::new(1),
            TransactionType::Use,
            30,
            Utc::now(),
        );

        assert_eq!(charge.signed_amount(), 50);
        assert_eq!(usage.signed_amount(), -30);
    }
}
