//! Core types for the point ledger.
//!
//! This crate provides the foundational types used throughout the point
//! ledger service:
//!
//! - **Identifiers**: `UserId`, `HistoryId`
//! - **Balances**: `UserPoint`
//! - **History**: `PointHistory`, `TransactionType`
//! - **Configuration**: `LedgerConfig`
//! - **Errors**: `LedgerError`
//!
//! # Point Unit
//!
//! A point is an indivisible unit of balance, stored as `i64`. Balances stay
//! within `0..=max_balance`; request amounts are strictly positive. History
//! entries store the positive magnitude plus a direction, so a user's history
//! replays to their balance without casts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod history;
pub mod ids;
pub mod point;

pub use config::{LedgerConfig, DEFAULT_MAX_BALANCE};
pub use error::{LedgerError, Result};
pub use history::{PointHistory, TransactionType};
pub use ids::{HistoryId, UserId};
pub use point::UserPoint;
