//! Point Ledger HTTP API Service.
//!
//! This crate provides the point ledger and its HTTP API:
//!
//! - Balance queries, with unseen users reporting zero
//! - Charge and use mutations with cap and sufficiency checks
//! - Charge/use history per user
//!
//! # Concurrency
//!
//! Mutations for one user serialize on that user's mutex from
//! [`UserLocks`]; mutations for different users run in parallel. Queries
//! take no lock and observe committed state only.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Health handler needs async for routing consistency

pub mod config;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod locks;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use ledger::LedgerService;
pub use locks::UserLocks;
pub use routes::create_router;
pub use state::AppState;
