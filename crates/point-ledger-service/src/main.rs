//! Point Ledger Service - HTTP API for per-user point balances.
//!
//! This is the main entry point for the point-ledger service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use point_ledger_service::{create_router, AppState, LedgerService, ServiceConfig};
use point_ledger_store::{MemoryBalanceStore, MemoryHistoryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,point_ledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Point Ledger Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        max_balance = config.ledger.max_balance,
        "Service configuration loaded"
    );

    // Initialize in-memory stores
    let balances = Arc::new(MemoryBalanceStore::default());
    let histories = Arc::new(MemoryHistoryStore::default());
    let ledger = Arc::new(LedgerService::new(balances, histories, config.ledger));

    // Build app state
    let state = AppState::new(ledger, config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
