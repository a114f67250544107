//! Bad-weather classification
//!
//! Pure threshold evaluation over a [`ForecastRecord`]. All bounds are
//! strict inequalities, so the boundary values themselves (0°C, 35°C,
//! 50 km/h, 70%, 30%, 80%) are still acceptable weather.

use serde::{Deserialize, Serialize};

use crate::entities::ForecastRecord;

/// Lower temperature bound in Celsius; anything colder is bad weather
pub const TEMPERATURE_MIN_C: f64 = 0.0;
/// Upper temperature bound in Celsius; anything hotter is bad weather
pub const TEMPERATURE_MAX_C: f64 = 35.0;
/// Maximum acceptable wind speed in km/h
pub const WIND_SPEED_MAX_KMH: f64 = 50.0;
/// Maximum acceptable precipitation probability percentage
pub const PRECIPITATION_MAX_PCT: f64 = 70.0;
/// Lower relative-humidity bound percentage
pub const HUMIDITY_MIN_PCT: f64 = 30.0;
/// Upper relative-humidity bound percentage
pub const HUMIDITY_MAX_PCT: f64 = 80.0;

/// A single threshold violation that makes a forecast "bad weather"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadWeatherReason {
    /// Temperature below 0°C
    Freezing,
    /// Temperature above 35°C
    ExtremeHeat,
    /// Wind speed above 50 km/h
    StrongWind,
    /// Precipitation probability above 70%
    LikelyPrecipitation,
    /// Relative humidity below 30%
    DryAir,
    /// Relative humidity above 80%
    HumidAir,
}

impl BadWeatherReason {
    /// Get a human-readable description of the violated bound
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Freezing => "Temperature below 0°C",
            Self::ExtremeHeat => "Temperature above 35°C",
            Self::StrongWind => "Wind speed above 50 km/h",
            Self::LikelyPrecipitation => "Precipitation probability above 70%",
            Self::DryAir => "Relative humidity below 30%",
            Self::HumidAir => "Relative humidity above 80%",
        }
    }
}

impl std::fmt::Display for BadWeatherReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Collect every violated threshold for a forecast
///
/// Returns an empty vector when conditions are acceptable. Reasons are
/// reported in a fixed order: temperature, wind, precipitation, humidity.
#[must_use]
pub fn bad_weather_reasons(forecast: &ForecastRecord) -> Vec<BadWeatherReason> {
    let mut reasons = Vec::new();

    if forecast.temperature < TEMPERATURE_MIN_C {
        reasons.push(BadWeatherReason::Freezing);
    }
    if forecast.temperature > TEMPERATURE_MAX_C {
        reasons.push(BadWeatherReason::ExtremeHeat);
    }
    if forecast.wind_speed > WIND_SPEED_MAX_KMH {
        reasons.push(BadWeatherReason::StrongWind);
    }
    if forecast.precipitation_probability > PRECIPITATION_MAX_PCT {
        reasons.push(BadWeatherReason::LikelyPrecipitation);
    }
    if forecast.humidity < HUMIDITY_MIN_PCT {
        reasons.push(BadWeatherReason::DryAir);
    }
    if forecast.humidity > HUMIDITY_MAX_PCT {
        reasons.push(BadWeatherReason::HumidAir);
    }

    reasons
}

/// Decide whether a forecast qualifies as bad weather
///
/// Any single violated threshold makes the verdict `true`. Pure and
/// deterministic; assumes a well-formed record — callers resolve
/// retrieval failures before classifying.
#[must_use]
pub fn is_bad_weather(forecast: &ForecastRecord) -> bool {
    !bad_weather_reasons(forecast).is_empty()
}
