//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, patch};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, points};
use crate::state::AppState;

/// Maximum concurrent requests for point endpoints. Mutations queue on the
/// per-user locks anyway; this bounds how many requests may wait at once.
const API_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
///
/// ## Points
/// - `GET /v1/points/:user_id` - Get current balance
/// - `GET /v1/points/:user_id/histories` - List charge/use history
/// - `PATCH /v1/points/:user_id/charge` - Charge points
/// - `PATCH /v1/points/:user_id/use` - Use points
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    let points_routes = Router::new()
        .route("/points/:user_id", get(points::get_point))
        .route("/points/:user_id/histories", get(points::get_histories))
        .route("/points/:user_id/charge", patch(points::charge))
        .route("/points/:user_id/use", patch(points::use_points))
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no limits)
        .route("/health", get(health::health))
        // API v1 routes
        .nest("/v1", points_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}
