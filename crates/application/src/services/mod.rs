//! Application services - Use case implementations

mod weather_check_service;

pub use weather_check_service::{PlaceWeather, RouteCheck, WeatherCheckService};
