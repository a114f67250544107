//! Weather check service - Resolve places, fetch forecasts, classify

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{
    BadWeatherReason, DomainError, ForecastRecord, GeoCoordinate, LocationKey,
    bad_weather_reasons,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Classified forecast for a single resolved place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceWeather {
    /// The place as the caller named it (city name or formatted coordinates)
    pub place: String,
    /// Upstream location key the place resolved to
    pub location_key: LocationKey,
    /// Normalized one-day forecast
    pub forecast: ForecastRecord,
    /// Whether the forecast qualifies as bad weather
    pub bad_weather: bool,
    /// Violated thresholds, empty when conditions are acceptable
    pub reasons: Vec<BadWeatherReason>,
}

/// Weather verdict for both endpoints of a travel route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCheck {
    /// Weather at the departure city
    pub start: PlaceWeather,
    /// Weather at the destination city
    pub end: PlaceWeather,
    /// True when either endpoint has bad weather
    pub any_bad_weather: bool,
    /// When the check was performed
    pub checked_at: DateTime<Utc>,
}

/// Service composing location resolution, forecast retrieval and
/// classification into the use cases the presentation layer consumes
pub struct WeatherCheckService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherCheckService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherCheckService").finish_non_exhaustive()
    }
}

impl WeatherCheckService {
    /// Create a new weather check service
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Check the weather for a city, resolved by name
    #[instrument(skip(self))]
    pub async fn check_city(&self, city_name: &str) -> Result<PlaceWeather, ApplicationError> {
        let city = city_name.trim();
        if city.is_empty() {
            return Err(DomainError::InvalidCityName(city_name.to_string()).into());
        }

        let location_key = self.weather.resolve_city(city).await?;
        self.classify(city.to_string(), location_key).await
    }

    /// Check the weather for a geographic position
    #[instrument(skip(self))]
    pub async fn check_position(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<PlaceWeather, ApplicationError> {
        let position =
            GeoCoordinate::new(latitude, longitude).map_err(DomainError::InvalidCoordinates)?;

        let location_key = self.weather.resolve_position(&position).await?;
        // No reverse-geocoded name available, label the place by its coordinates
        self.classify(format!("{latitude:.4}, {longitude:.4}"), location_key)
            .await
    }

    /// Check the weather at both endpoints of a travel route
    ///
    /// A city that resolves to no location key surfaces as a not-found
    /// failure for the whole check; the caller decides how to present it.
    #[instrument(skip(self))]
    pub async fn check_route(
        &self,
        start_city: &str,
        end_city: &str,
    ) -> Result<RouteCheck, ApplicationError> {
        let start = self.check_city(start_city).await?;
        let end = self.check_city(end_city).await?;
        let any_bad_weather = start.bad_weather || end.bad_weather;

        debug!(
            start = %start.place,
            end = %end.place,
            any_bad_weather,
            "Route weather check complete"
        );

        Ok(RouteCheck {
            start,
            end,
            any_bad_weather,
            checked_at: Utc::now(),
        })
    }

    /// Check if the underlying weather service is reachable
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }

    /// Fetch the forecast for a resolved key and attach the verdict
    async fn classify(
        &self,
        place: String,
        location_key: LocationKey,
    ) -> Result<PlaceWeather, ApplicationError> {
        let forecast = self.weather.daily_forecast(&location_key).await?;
        let reasons = bad_weather_reasons(&forecast);

        debug!(
            place = %place,
            forecast = %forecast.summary(),
            bad_weather = !reasons.is_empty(),
            "Forecast classified"
        );

        Ok(PlaceWeather {
            place,
            location_key,
            forecast,
            bad_weather: !reasons.is_empty(),
            reasons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;

    fn key(value: &str) -> LocationKey {
        LocationKey::new(value).unwrap()
    }

    fn nominal_forecast() -> ForecastRecord {
        ForecastRecord::new(20.0, 50.0, 10.0, 10.0)
    }

    fn freezing_forecast() -> ForecastRecord {
        ForecastRecord::new(-1.0, 50.0, 10.0, 10.0)
    }

    #[tokio::test]
    async fn check_city_classifies_nominal_forecast() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_city()
            .withf(|city| city == "Moscow")
            .returning(|_| Ok(key("294021")));
        mock.expect_daily_forecast()
            .withf(|k| k.as_str() == "294021")
            .returning(|_| Ok(nominal_forecast()));

        let service = WeatherCheckService::new(Arc::new(mock));
        let result = service.check_city("Moscow").await.unwrap();

        assert_eq!(result.place, "Moscow");
        assert_eq!(result.location_key.as_str(), "294021");
        assert!(!result.bad_weather);
        assert!(result.reasons.is_empty());
    }

    #[tokio::test]
    async fn check_city_trims_whitespace() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_city()
            .withf(|city| city == "Moscow")
            .returning(|_| Ok(key("294021")));
        mock.expect_daily_forecast()
            .returning(|_| Ok(nominal_forecast()));

        let service = WeatherCheckService::new(Arc::new(mock));
        let result = service.check_city("  Moscow  ").await.unwrap();
        assert_eq!(result.place, "Moscow");
    }

    #[tokio::test]
    async fn check_city_rejects_empty_name_before_any_lookup() {
        let mock = MockWeatherPort::new();
        let service = WeatherCheckService::new(Arc::new(mock));

        let result = service.check_city("   ").await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidCityName(_)))
        ));
    }

    #[tokio::test]
    async fn check_city_propagates_not_found() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_city().returning(|city| {
            Err(ApplicationError::NotFound(format!(
                "No location found for city {city}"
            )))
        });

        let service = WeatherCheckService::new(Arc::new(mock));
        let result = service.check_city("Atlantis").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn check_position_labels_place_with_coordinates() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_position()
            .returning(|_| Ok(key("295212")));
        mock.expect_daily_forecast()
            .returning(|_| Ok(nominal_forecast()));

        let service = WeatherCheckService::new(Arc::new(mock));
        let result = service.check_position(56.837864, 60.594882).await.unwrap();
        assert_eq!(result.place, "56.8379, 60.5949");
    }

    #[tokio::test]
    async fn check_position_rejects_invalid_coordinates_before_any_lookup() {
        let mock = MockWeatherPort::new();
        let service = WeatherCheckService::new(Arc::new(mock));

        let result = service.check_position(91.0, 0.0).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::InvalidCoordinates(_)))
        ));
    }

    #[tokio::test]
    async fn check_route_reports_bad_weather_at_either_endpoint() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_city()
            .withf(|city| city == "Moscow")
            .returning(|_| Ok(key("294021")));
        mock.expect_resolve_city()
            .withf(|city| city == "Norilsk")
            .returning(|_| Ok(key("295212")));
        mock.expect_daily_forecast()
            .withf(|k| k.as_str() == "294021")
            .returning(|_| Ok(nominal_forecast()));
        mock.expect_daily_forecast()
            .withf(|k| k.as_str() == "295212")
            .returning(|_| Ok(freezing_forecast()));

        let service = WeatherCheckService::new(Arc::new(mock));
        let check = service.check_route("Moscow", "Norilsk").await.unwrap();

        assert!(!check.start.bad_weather);
        assert!(check.end.bad_weather);
        assert_eq!(check.end.reasons, vec![BadWeatherReason::Freezing]);
        assert!(check.any_bad_weather);
    }

    #[tokio::test]
    async fn check_route_is_clear_when_both_endpoints_are_nominal() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_city().returning(|_| Ok(key("294021")));
        mock.expect_daily_forecast()
            .returning(|_| Ok(nominal_forecast()));

        let service = WeatherCheckService::new(Arc::new(mock));
        let check = service
            .check_route("Moscow", "Yekaterinburg")
            .await
            .unwrap();
        assert!(!check.any_bad_weather);
    }

    #[tokio::test]
    async fn check_route_fails_when_one_endpoint_is_unknown() {
        let mut mock = MockWeatherPort::new();
        mock.expect_resolve_city()
            .withf(|city| city == "Moscow")
            .returning(|_| Ok(key("294021")));
        mock.expect_resolve_city()
            .withf(|city| city == "Atlantis")
            .returning(|_| Err(ApplicationError::NotFound("no match".to_string())));
        mock.expect_daily_forecast()
            .returning(|_| Ok(nominal_forecast()));

        let service = WeatherCheckService::new(Arc::new(mock));
        let result = service.check_route("Moscow", "Atlantis").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn is_available_delegates_to_port() {
        let mut mock = MockWeatherPort::new();
        mock.expect_is_available().returning(|| false);

        let service = WeatherCheckService::new(Arc::new(mock));
        assert!(!service.is_available().await);
    }

    #[test]
    fn service_debug_does_not_leak_port() {
        let mock = MockWeatherPort::new();
        let service = WeatherCheckService::new(Arc::new(mock));
        assert!(format!("{service:?}").contains("WeatherCheckService"));
    }
}
