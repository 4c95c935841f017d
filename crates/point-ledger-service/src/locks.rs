//! Per-user lock registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use point_ledger_core::UserId;

/// Registry handing out one async mutex per user id.
///
/// Balance mutations run under the target user's mutex, so concurrent charge
/// and use calls for one user serialize while other users proceed in
/// parallel. Handles are created lazily on first use and live for the
/// process lifetime; the registry grows by one small allocation per distinct
/// user.
#[derive(Debug, Default)]
pub struct UserLocks {
    handles: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    /// Acquire the lock for a user, waiting until the current holder (if
    /// any) releases it.
    ///
    /// The registry map is held only long enough to clone the user's handle
    /// out; the returned guard is what serializes the caller against other
    /// mutations for the same user.
    pub async fn acquire(&self, user_id: UserId) -> OwnedMutexGuard<()> {
        let handle = {
            // Entry insert/clone only; a poisoned map is still intact.
            let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(handles.entry(user_id).or_default())
        };
        handle.lock_owned().await
    }
}
