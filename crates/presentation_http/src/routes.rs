//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather API (v1)
        .route("/v1/weather", get(handlers::weather::get_weather))
        .route("/v1/route/check", post(handlers::route_check::check_route))
        // Attach state
        .with_state(state)
}
