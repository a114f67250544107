//! Route weather check handler
//!
//! Checks the weather at both endpoints of a travel route.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use application::RouteCheck;

use crate::{error::ApiError, handlers::weather::PlaceWeatherResponse, state::AppState};

/// Request body for the route weather check
#[derive(Debug, Deserialize)]
pub struct RouteCheckRequest {
    /// Departure city name
    pub start_city: String,
    /// Destination city name
    pub end_city: String,
}

/// Route weather check result
#[derive(Debug, Serialize)]
pub struct RouteCheckResponse {
    /// Weather at the departure city
    pub start: PlaceWeatherResponse,
    /// Weather at the destination city
    pub end: PlaceWeatherResponse,
    /// True when either endpoint has bad weather
    pub any_bad_weather: bool,
    /// When the check was performed
    pub checked_at: DateTime<Utc>,
}

impl From<RouteCheck> for RouteCheckResponse {
    fn from(check: RouteCheck) -> Self {
        Self {
            start: check.start.into(),
            end: check.end.into(),
            any_bad_weather: check.any_bad_weather,
            checked_at: check.checked_at,
        }
    }
}

/// Check the weather at both route endpoints
///
/// POST /v1/route/check
#[instrument(skip(state, request), fields(start = %request.start_city, end = %request.end_city))]
pub async fn check_route(
    State(state): State<AppState>,
    Json(request): Json<RouteCheckRequest>,
) -> Result<Json<RouteCheckResponse>, ApiError> {
    let check = state
        .weather_service
        .check_route(&request.start_city, &request.end_city)
        .await?;

    Ok(Json(check.into()))
}
