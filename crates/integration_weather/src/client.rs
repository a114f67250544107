//! AccuWeather forecast client
//!
//! HTTP client for the AccuWeather location search and 1-day forecast
//! endpoints. Each operation is a single outbound GET authenticated with
//! the configured API key; there are no retries and no caching.

use domain::{ForecastRecord, GeoCoordinate, LocationKey};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CitySearchResult, DailyForecastResponse, GeopositionResult};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The search matched no location
    #[error("No location found for {0}")]
    LocationNotFound(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Empty or whitespace city name provided
    #[error("Invalid city name: {0:?}")]
    InvalidCityName(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather service configuration
///
/// Constructed once at process start and passed to the client; the API
/// key and response language are never ambient module state.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// AccuWeather API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key issued by AccuWeather
    pub api_key: SecretString,

    /// Response language passed to every endpoint (default: ru-ru)
    #[serde(default = "default_language")]
    pub language: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://dataservice.accuweather.com".to_string()
}

fn default_language() -> String {
    "ru-ru".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl WeatherConfig {
    /// Create a configuration with the given API key and defaults for
    /// everything else
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            language: default_language(),
            timeout_secs: default_timeout(),
        }
    }

    /// Check whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// AccuWeather HTTP client
#[derive(Debug)]
pub struct AccuWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl AccuWeatherClient {
    /// Create a new AccuWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Resolve a city name to an upstream location key
    ///
    /// Queries the city search endpoint and returns the key of the first
    /// match. An empty result set is a [`WeatherError::LocationNotFound`].
    #[instrument(skip(self))]
    pub async fn resolve_location_by_name(
        &self,
        city_name: &str,
    ) -> Result<LocationKey, WeatherError> {
        let city = city_name.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidCityName(city_name.to_string()));
        }

        let url = self.city_search_url();
        debug!(url = %url, city, "Resolving location by city name");

        let results: Vec<CitySearchResult> = self.get_json(&url, city).await?;

        results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(format!("city {city}")))
            .and_then(|result| Self::into_location_key(result.key))
    }

    /// Resolve geographic coordinates to an upstream location key
    ///
    /// Queries the geoposition search endpoint with a `"{lat},{lon}"`
    /// query value; the response is a single location object.
    #[instrument(skip(self))]
    pub async fn resolve_location_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationKey, WeatherError> {
        let position = GeoCoordinate::new(latitude, longitude)
            .map_err(|_| WeatherError::InvalidCoordinates)?;

        let url = self.geoposition_search_url();
        let query = format!("{},{}", position.latitude(), position.longitude());
        debug!(url = %url, query = %query, "Resolving location by coordinates");

        let result: GeopositionResult = self.get_json(&url, &query).await?;
        Self::into_location_key(result.key)
    }

    /// Fetch and normalize the one-day forecast for a resolved location
    #[instrument(skip(self), fields(location_key = %location_key))]
    pub async fn get_forecast(
        &self,
        location_key: &LocationKey,
    ) -> Result<ForecastRecord, WeatherError> {
        let url = self.daily_forecast_url(location_key);
        debug!(url = %url, "Fetching one-day forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.auth_query())
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response)?;
        let forecast: DailyForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let record = forecast.into_record();
        debug!(forecast = %record.summary(), "Forecast normalized");
        Ok(record)
    }

    /// Build the city search endpoint URL
    fn city_search_url(&self) -> String {
        format!("{}/locations/v1/cities/search", self.config.base_url)
    }

    /// Build the geoposition search endpoint URL
    fn geoposition_search_url(&self) -> String {
        format!(
            "{}/locations/v1/cities/geoposition/search",
            self.config.base_url
        )
    }

    /// Build the 1-day forecast endpoint URL for a location key
    fn daily_forecast_url(&self, location_key: &LocationKey) -> String {
        format!(
            "{}/forecasts/v1/daily/1day/{}",
            self.config.base_url,
            location_key.as_str()
        )
    }

    /// Query parameters common to every endpoint
    fn auth_query(&self) -> [(&'static str, String); 2] {
        [
            ("apikey", self.config.api_key.expose_secret().to_string()),
            ("language", self.config.language.clone()),
        ]
    }

    /// Perform a search GET with the `q` parameter and decode the body
    async fn get_json<T>(&self, url: &str, q: &str) -> Result<T, WeatherError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self
            .client
            .get(url)
            .query(&self.auth_query())
            .query(&[("q", q)])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let response = Self::check_status(response)?;
        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Map non-success statuses to the error taxonomy
    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, WeatherError> {
        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(response)
    }

    /// Upstream keys are opaque but must not be blank
    fn into_location_key(key: String) -> Result<LocationKey, WeatherError> {
        LocationKey::new(key)
            .map_err(|e| WeatherError::ParseError(format!("Invalid location key: {e}")))
    }
}
