//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::ledger::LedgerService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The ledger all handlers operate on.
    pub ledger: Arc<LedgerService>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Build application state from a ledger and configuration.
    #[must_use]
    pub fn new(ledger: Arc<LedgerService>, config: ServiceConfig) -> Self {
        Self { ledger, config }
    }
}
