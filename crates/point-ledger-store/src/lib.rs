//! Storage layer for the point ledger.
//!
//! This crate defines the two tables the ledger runs on and provides
//! in-memory implementations of both:
//!
//! - [`BalanceStore`]: the current `UserPoint` record per user
//! - [`HistoryStore`]: an append-only log of committed charge/use events
//!
//! Individual store calls are atomic. Cross-call atomicity (read, check,
//! write, append as one unit) is the caller's responsibility; the ledger
//! serializes those sequences per user.
//!
//! The traits are annotated with `mockall::automock`, so `MockBalanceStore`
//! and `MockHistoryStore` are available to consumers for scripting store
//! behavior in unit tests.
//!
//! # Example
//!
//! ```no_run
//! use point_ledger_core::UserId;
//! use point_ledger_store::{BalanceStore, MemoryBalanceStore, Result};
//!
//! async fn demo(store: &MemoryBalanceStore) -> Result<()> {
//!     store.upsert(UserId::new(1), 500).await?;
//!     let record = store.get(UserId::new(1)).await?;
//!     assert_eq!(record.map(|r| r.point), Some(500));
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::{MemoryBalanceStore, MemoryHistoryStore};

use chrono::{DateTime, Utc};
use point_ledger_core::{PointHistory, TransactionType, UserId, UserPoint};

/// Store of current balance records, keyed by user id.
#[mockall::automock]
#[async_trait::async_trait]
pub trait BalanceStore: Send + Sync {
    /// Fetch the current record for a user, or `None` if the user has never
    /// been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    async fn get(&self, user_id: UserId) -> Result<Option<UserPoint>>;

    /// Insert or replace the record for a user, returning the stored record
    /// with its refreshed `updated_at`.
    ///
    /// The replacement is whole-record; a concurrent `get` observes the old
    /// record or the new one, never a mix.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    async fn upsert(&self, user_id: UserId, point: i64) -> Result<UserPoint>;
}

/// Append-only log of committed charge/use events.
#[mockall::automock]
#[async_trait::async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append one entry, assigning it the next entry id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    async fn append(
        &self,
        user_id: UserId,
        amount: i64,
        transaction_type: TransactionType,
        timestamp: DateTime<Utc>,
    ) -> Result<PointHistory>;

    /// List all entries for a user in the order they were appended.
    ///
    /// Users with no entries get an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<PointHistory>>;
}
