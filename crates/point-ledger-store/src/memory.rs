//! In-memory store implementations.
//!
//! These back the ledger with mutex-guarded tables: a map of balance records
//! and a single append log with an id cursor. Each method takes its table
//! mutex once, which gives the per-call atomicity the store contract asks
//! for.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use point_ledger_core::{HistoryId, PointHistory, TransactionType, UserId, UserPoint};

use crate::error::Result;
use crate::{BalanceStore, HistoryStore};

/// Mutex-guarded table of balance records.
#[derive(Debug, Default)]
pub struct MemoryBalanceStore {
    records: Mutex<HashMap<UserId, UserPoint>>,
}

#[async_trait::async_trait]
impl BalanceStore for MemoryBalanceStore {
    async fn get(&self, user_id: UserId) -> Result<Option<UserPoint>> {
        Ok(self.records.lock()?.get(&user_id).copied())
    }

    async fn upsert(&self, user_id: UserId, point: i64) -> Result<UserPoint> {
        let record = UserPoint::new(user_id, point, Utc::now());
        self.records.lock()?.insert(user_id, record);
        Ok(record)
    }
}

/// Mutex-guarded append log with a monotonic id cursor.
///
/// Entries for all users share one log, so entry ids also order events
/// across users.
#[derive(Debug)]
pub struct MemoryHistoryStore {
    log: Mutex<HistoryLog>,
}

#[derive(Debug)]
struct HistoryLog {
    entries: Vec<PointHistory>,
    next_id: u64,
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self {
            log: Mutex::new(HistoryLog {
                entries: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait::async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(
        &self,
        user_id: UserId,
        amount: i64,
        transaction_type: TransactionType,
        timestamp: DateTime<Utc>,
    ) -> Result<PointHistory> {
        let mut log = self.log.lock()?;
        let entry = PointHistory::new(
            HistoryId::new(log.next_id),
            user_id,
            transaction_type,
            amount,
            timestamp,
        );
        log.next_id += 1;
        log.entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<PointHistory>> {
        let entries = self
            .log
            .lock()?
            .entries
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        Ok(entries)
    }
}
