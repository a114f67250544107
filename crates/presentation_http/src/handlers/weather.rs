//! Point weather check handler
//!
//! Checks a single place, named by city or by coordinates.

use axum::{
    Json,
    extract::{Query, State},
};
use domain::{BadWeatherReason, ForecastRecord};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use application::PlaceWeather;

use crate::{error::ApiError, state::AppState};

/// Query parameters for the point weather check
///
/// Exactly one of `city` or the `lat`/`lon` pair must be supplied.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City name to resolve
    pub city: Option<String>,
    /// Latitude (-90 to 90)
    pub lat: Option<f64>,
    /// Longitude (-180 to 180)
    pub lon: Option<f64>,
}

/// Classified forecast for a single place
#[derive(Debug, Clone, Serialize)]
pub struct PlaceWeatherResponse {
    /// The place as the caller named it
    pub place: String,
    /// Upstream location key the place resolved to
    pub location_key: String,
    /// Normalized one-day forecast
    pub forecast: ForecastRecord,
    /// Whether the forecast qualifies as bad weather
    pub bad_weather: bool,
    /// Violated thresholds, empty when conditions are acceptable
    pub reasons: Vec<BadWeatherReason>,
}

impl From<PlaceWeather> for PlaceWeatherResponse {
    fn from(weather: PlaceWeather) -> Self {
        Self {
            place: weather.place,
            location_key: weather.location_key.into(),
            forecast: weather.forecast,
            bad_weather: weather.bad_weather,
            reasons: weather.reasons,
        }
    }
}

/// Check the weather for one place
///
/// GET /v1/weather?city=... or GET /v1/weather?lat=...&lon=...
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<PlaceWeatherResponse>, ApiError> {
    let result = match (query.city, query.lat, query.lon) {
        (Some(city), None, None) => state.weather_service.check_city(&city).await?,
        (None, Some(lat), Some(lon)) => state.weather_service.check_position(lat, lon).await?,
        _ => {
            return Err(ApiError::BadRequest(
                "Provide either ?city= or both ?lat= and ?lon=".to_string(),
            ));
        },
    };

    Ok(Json(result.into()))
}
