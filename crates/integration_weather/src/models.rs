//! AccuWeather wire models
//!
//! Raw response shapes for the three endpoints the client consumes. Only
//! the fields the normalized record needs are modeled; the upstream
//! responses carry far more.

use domain::ForecastRecord;
use serde::Deserialize;

/// One entry of the city search response (an array upstream)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CitySearchResult {
    #[serde(rename = "Key")]
    pub key: String,
}

/// Geoposition search response (a single object upstream)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeopositionResult {
    #[serde(rename = "Key")]
    pub key: String,
}

/// The 1-day forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyForecastResponse {
    #[serde(rename = "DailyForecasts")]
    pub daily_forecasts: DailyForecasts,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyForecasts {
    #[serde(rename = "Day")]
    pub day: DayPart,
}

/// Daytime portion of the forecast
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DayPart {
    #[serde(rename = "WetBulbTemperature")]
    pub wet_bulb_temperature: AveragedMetric,
    #[serde(rename = "RelativeHumidity")]
    pub relative_humidity: Averaged,
    #[serde(rename = "Wind")]
    pub wind: Wind,
    // Some response variants name this field RainProbability
    #[serde(rename = "PrecipitationProbability", alias = "RainProbability")]
    pub precipitation_probability: f64,
}

/// A metric reported as `{"Average": {"Value": ..., "Unit": ...}}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AveragedMetric {
    #[serde(rename = "Average")]
    pub average: UnitValue,
}

/// A metric reported as `{"Average": <number>}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Averaged {
    #[serde(rename = "Average")]
    pub average: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UnitValue {
    #[serde(rename = "Value")]
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Wind {
    #[serde(rename = "Speed")]
    pub speed: UnitValue,
}

impl DailyForecastResponse {
    /// Flatten the nested response into the normalized record
    pub(crate) fn into_record(self) -> ForecastRecord {
        let day = self.daily_forecasts.day;
        ForecastRecord::new(
            day.wet_bulb_temperature.average.value,
            day.relative_humidity.average,
            day.wind.speed.value,
            day.precipitation_probability,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forecast_json() -> &'static str {
        r#"{
            "DailyForecasts": {
                "Date": "2024-01-15T07:00:00+03:00",
                "Day": {
                    "WetBulbTemperature": {
                        "Minimum": {"Value": 14.2, "Unit": "C", "UnitType": 17},
                        "Maximum": {"Value": 24.8, "Unit": "C", "UnitType": 17},
                        "Average": {"Value": 19.5, "Unit": "C", "UnitType": 17}
                    },
                    "RelativeHumidity": {"Minimum": 38, "Maximum": 72, "Average": 55},
                    "Wind": {
                        "Speed": {"Value": 12.9, "Unit": "km/h", "UnitType": 7},
                        "Direction": {"Degrees": 230, "Localized": "SW"}
                    },
                    "PrecipitationProbability": 25
                }
            }
        }"#
    }

    #[test]
    fn decodes_nested_forecast_response() {
        let response: DailyForecastResponse =
            serde_json::from_str(sample_forecast_json()).expect("decode");
        let record = response.into_record();

        assert!((record.temperature - 19.5).abs() < f64::EPSILON);
        assert!((record.humidity - 55.0).abs() < f64::EPSILON);
        assert!((record.wind_speed - 12.9).abs() < f64::EPSILON);
        assert!((record.precipitation_probability - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_rain_probability_variant() {
        let json = sample_forecast_json().replace("PrecipitationProbability", "RainProbability");
        let response: DailyForecastResponse = serde_json::from_str(&json).expect("decode");
        let record = response.into_record();
        assert!((record.precipitation_probability - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_field_fails_to_decode() {
        let json = sample_forecast_json().replace("\"Wind\"", "\"Breeze\"");
        let result: Result<DailyForecastResponse, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn decodes_city_search_entry() {
        let json = r#"[{"Version": 1, "Key": "294021", "LocalizedName": "Moscow"}]"#;
        let results: Vec<CitySearchResult> = serde_json::from_str(json).expect("decode");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "294021");
    }

    #[test]
    fn decodes_geoposition_result() {
        let json = r#"{"Version": 1, "Key": "295212", "LocalizedName": "Yekaterinburg"}"#;
        let result: GeopositionResult = serde_json::from_str(json).expect("decode");
        assert_eq!(result.key, "295212");
    }
}
