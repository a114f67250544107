//! Normalized daily forecast record

use serde::{Deserialize, Serialize};

/// A normalized one-day weather summary
///
/// Produced fresh by the forecast client on every request, never mutated
/// and never persisted. Field names match the normalized JSON shape this
/// service exposes to its callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// Average daytime wet-bulb temperature in Celsius
    pub temperature: f64,
    /// Average relative humidity percentage (0-100)
    pub humidity: f64,
    /// Average daytime wind speed in km/h
    pub wind_speed: f64,
    /// Daytime precipitation probability percentage (0-100)
    pub precipitation_probability: f64,
}

impl ForecastRecord {
    /// Create a new forecast record
    #[must_use]
    pub const fn new(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        precipitation_probability: f64,
    ) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            precipitation_probability,
        }
    }

    /// Get a formatted one-line summary of the forecast
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{:.1}°C, humidity {:.0}%, wind {:.1} km/h, precipitation {:.0}%",
            self.temperature, self.humidity, self.wind_speed, self.precipitation_probability
        )
    }
}
