//! Common test utilities for point-ledger integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use point_ledger_core::{LedgerConfig, UserId, DEFAULT_MAX_BALANCE};
use point_ledger_service::{create_router, AppState, LedgerService, ServiceConfig};
use point_ledger_store::{MemoryBalanceStore, MemoryHistoryStore};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// A test user id for requests.
    pub test_user_id: UserId,
}

impl TestHarness {
    /// Create a new test harness with fresh in-memory stores.
    pub fn new() -> Self {
        Self::with_max_balance(DEFAULT_MAX_BALANCE)
    }

    /// Create a test harness with a specific balance cap.
    pub fn with_max_balance(max_balance: i64) -> Self {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            ledger: LedgerConfig { max_balance },
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };

        let ledger = Arc::new(LedgerService::new(
            Arc::new(MemoryBalanceStore::default()),
            Arc::new(MemoryHistoryStore::default()),
            config.ledger,
        ));

        let state = AppState::new(ledger, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            test_user_id: UserId::new(1),
        }
    }

    /// Balance path for the harness user.
    pub fn point_path(&self) -> String {
        format!("/v1/points/{}", self.test_user_id)
    }

    /// History path for the harness user.
    pub fn histories_path(&self) -> String {
        format!("/v1/points/{}/histories", self.test_user_id)
    }

    /// Charge path for the harness user.
    pub fn charge_path(&self) -> String {
        format!("/v1/points/{}/charge", self.test_user_id)
    }

    /// Use path for the harness user.
    pub fn use_path(&self) -> String {
        format!("/v1/points/{}/use", self.test_user_id)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
