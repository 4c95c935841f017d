//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use point_ledger_core::LedgerError;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested amount was zero or negative.
    #[error("invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: i64,
    },

    /// The balance does not cover the requested use.
    #[error("insufficient balance: balance={balance}, required={required}")]
    InsufficientBalance {
        /// Current balance.
        balance: i64,
        /// Required amount.
        required: i64,
    },

    /// The charge would push the balance above the cap.
    #[error("balance cap exceeded: balance={balance}, amount={amount}, max_balance={max_balance}")]
    BalanceCapExceeded {
        /// Current balance.
        balance: i64,
        /// Requested amount.
        amount: i64,
        /// The configured cap.
        max_balance: i64,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::InvalidAmount { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_amount", self.to_string(), None)
            }
            Self::InsufficientBalance { balance, required } => (
                StatusCode::PAYMENT_REQUIRED,
                "insufficient_balance",
                self.to_string(),
                Some(serde_json::json!({
                    "balance": balance,
                    "required": required
                })),
            ),
            Self::BalanceCapExceeded {
                balance,
                amount,
                max_balance,
            } => (
                StatusCode::CONFLICT,
                "balance_cap_exceeded",
                self.to_string(),
                Some(serde_json::json!({
                    "balance": balance,
                    "amount": amount,
                    "max_balance": max_balance
                })),
            ),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { balance, required } => {
                Self::InsufficientBalance { balance, required }
            }
            LedgerError::BalanceCapExceeded {
                balance,
                amount,
                max_balance,
            } => Self::BalanceCapExceeded {
                balance,
                amount,
                max_balance,
            },
            LedgerError::InvalidAmount { amount } => Self::InvalidAmount { amount },
            LedgerError::Store(err) => Self::Internal(err.to_string()),
        }
    }
}
