//! AccuWeather integration
//!
//! Client for the AccuWeather location and daily-forecast APIs
//! (<https://developer.accuweather.com>). Resolves places to opaque
//! location keys and normalizes one-day forecasts.

pub mod client;
mod models;

pub use client::{AccuWeatherClient, WeatherConfig, WeatherError};
