//! Point balance, mutation, and history handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use point_ledger_core::{PointHistory, UserId, UserPoint};

use crate::error::ApiError;
use crate::state::AppState;

/// Balance response.
#[derive(Debug, Serialize)]
pub struct PointResponse {
    /// User id.
    pub id: u64,
    /// Current balance in points.
    pub point: i64,
    /// When the balance last changed.
    pub updated_at: String,
}

impl From<UserPoint> for PointResponse {
    fn from(record: UserPoint) -> Self {
        Self {
            id: record.id.value(),
            point: record.point,
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Get the current balance for a user.
///
/// Users the ledger has never seen report a zero balance.
pub async fn get_point(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<PointResponse>, ApiError> {
    let record = state.ledger.get_balance(user_id).await?;
    Ok(Json(record.into()))
}

/// Amount payload for charge and use requests.
#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    /// Points to charge or use. Must be positive.
    pub amount: i64,
}

/// Charge points to a user's balance.
pub async fn charge(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<PointResponse>, ApiError> {
    let record = state.ledger.charge(user_id, body.amount).await?;
    Ok(Json(record.into()))
}

/// Use points from a user's balance.
pub async fn use_points(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
    Json(body): Json<AmountRequest>,
) -> Result<Json<PointResponse>, ApiError> {
    let record = state.ledger.use_points(user_id, body.amount).await?;
    Ok(Json(record.into()))
}

/// History entry response.
#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse {
    /// Entry id.
    pub id: u64,
    /// User id.
    pub user_id: u64,
    /// Transaction type ("charge" or "use").
    pub transaction_type: String,
    /// Magnitude of the change in points.
    pub amount: i64,
    /// When the mutation committed.
    pub timestamp: String,
}

impl From<&PointHistory> for HistoryEntryResponse {
    fn from(entry: &PointHistory) -> Self {
        Self {
            id: entry.id.value(),
            user_id: entry.user_id.value(),
            transaction_type: format!("{:?}", entry.transaction_type).to_lowercase(),
            amount: entry.amount,
            timestamp: entry.timestamp.to_rfc3339(),
        }
    }
}

/// History list response.
#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    /// Entries in commit order.
    pub histories: Vec<HistoryEntryResponse>,
}

/// List a user's charge/use history.
///
/// Users with no committed mutations get an empty list.
pub async fn get_histories(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<UserId>,
) -> Result<Json<HistoryListResponse>, ApiError> {
    let entries = state.ledger.get_history(user_id).await?;

    Ok(Json(HistoryListResponse {
        histories: entries.iter().map(HistoryEntryResponse::from).collect(),
    }))
}
