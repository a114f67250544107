//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{DomainError, ForecastRecord, GeoCoordinate, LocationKey};
use integration_weather::{AccuWeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Coordinates used for the availability probe (Moscow, Izmailovo)
const PROBE_COORDINATES: (f64, f64) = (55.791541, 37.748656);

/// Adapter for weather services using the AccuWeather API
pub struct WeatherAdapter {
    client: AccuWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"AccuWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from the given weather configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = AccuWeatherClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::LocationNotFound(what) => {
                ApplicationError::NotFound(format!("No location found for {what}"))
            },
            WeatherError::InvalidCoordinates => {
                ApplicationError::Domain(DomainError::ValidationError(
                    "latitude must be -90 to 90, longitude must be -180 to 180".to_string(),
                ))
            },
            WeatherError::InvalidCityName(name) => {
                ApplicationError::Domain(DomainError::InvalidCityName(name))
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn resolve_city(&self, city_name: &str) -> Result<LocationKey, ApplicationError> {
        let result = self
            .client
            .resolve_location_by_name(city_name)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(key) => debug!(location_key = %key, "Resolved city"),
            Err(e) => debug!(error = %e, "Failed to resolve city"),
        }

        result
    }

    #[instrument(skip(self), fields(lat = position.latitude(), lon = position.longitude()))]
    async fn resolve_position(
        &self,
        position: &GeoCoordinate,
    ) -> Result<LocationKey, ApplicationError> {
        let result = self
            .client
            .resolve_location_by_coordinates(position.latitude(), position.longitude())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(key) => debug!(location_key = %key, "Resolved position"),
            Err(e) => debug!(error = %e, "Failed to resolve position"),
        }

        result
    }

    #[instrument(skip(self), fields(location_key = %location_key))]
    async fn daily_forecast(
        &self,
        location_key: &LocationKey,
    ) -> Result<ForecastRecord, ApplicationError> {
        let result = self
            .client
            .get_forecast(location_key)
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => debug!(forecast = %forecast.summary(), "Retrieved forecast"),
            Err(e) => debug!(error = %e, "Failed to get forecast"),
        }

        result
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        // A lightweight reachability probe using a fixed reference point
        let (lat, lon) = PROBE_COORDINATES;
        self.client
            .resolve_location_by_coordinates(lat, lon)
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        let adapter = WeatherAdapter::new(WeatherConfig::new("test-key"));
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = WeatherAdapter::new(WeatherConfig::new("test-key")).unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("WeatherAdapter"));
    }

    #[test]
    fn map_error_request_failed() {
        let err = WeatherError::RequestFailed("HTTP 502".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_service_unavailable() {
        let err = WeatherError::ServiceUnavailable("HTTP 503".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_error_parse_error() {
        let err = WeatherError::ParseError("missing field".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Internal(_)));
    }

    #[test]
    fn map_error_location_not_found() {
        let err = WeatherError::LocationNotFound("city Atlantis".into());
        let app_err = WeatherAdapter::map_error(err);
        let ApplicationError::NotFound(msg) = app_err else {
            unreachable!("Expected NotFound");
        };
        assert!(msg.contains("Atlantis"));
    }

    #[test]
    fn map_error_invalid_coordinates() {
        let err = WeatherError::InvalidCoordinates;
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(
            app_err,
            ApplicationError::Domain(DomainError::ValidationError(_))
        ));
    }

    #[test]
    fn map_error_invalid_city_name() {
        let err = WeatherError::InvalidCityName("  ".into());
        let app_err = WeatherAdapter::map_error(err);
        assert!(matches!(
            app_err,
            ApplicationError::Domain(DomainError::InvalidCityName(_))
        ));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherAdapter>();
    }
}
