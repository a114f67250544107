//! Value Objects - Immutable, identity-less domain primitives

mod geo_coordinate;
mod location_key;

pub use geo_coordinate::{GeoCoordinate, InvalidCoordinates};
pub use location_key::{InvalidLocationKey, LocationKey};
