//! Infrastructure layer
//!
//! Configuration loading and adapters binding application ports to
//! external integrations.

pub mod adapters;
pub mod config;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, Environment, ServerConfig};
