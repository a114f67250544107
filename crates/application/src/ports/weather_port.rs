//! Weather service port
//!
//! Defines the interface for location resolution and forecast retrieval.

use async_trait::async_trait;
use domain::{ForecastRecord, GeoCoordinate, LocationKey};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Every method maps to exactly one upstream request; there is no caching
/// or retrying behind this interface. A lookup that matches nothing
/// resolves to [`ApplicationError::NotFound`], never a panic.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Resolve a city name to an upstream location key
    ///
    /// Returns the first match reported by the upstream city search.
    async fn resolve_city(&self, city_name: &str) -> Result<LocationKey, ApplicationError>;

    /// Resolve geographic coordinates to an upstream location key
    async fn resolve_position(
        &self,
        position: &GeoCoordinate,
    ) -> Result<LocationKey, ApplicationError>;

    /// Fetch the one-day forecast for a previously resolved location
    async fn daily_forecast(
        &self,
        location_key: &LocationKey,
    ) -> Result<ForecastRecord, ApplicationError>;

    /// Check if the weather service is reachable
    async fn is_available(&self) -> bool;
}
