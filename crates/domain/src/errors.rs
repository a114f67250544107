//! Domain-level errors

use thiserror::Error;

use crate::value_objects::{InvalidCoordinates, InvalidLocationKey};

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Empty or otherwise unusable place name
    #[error("Invalid city name: {0:?}")]
    InvalidCityName(String),

    /// Coordinates outside the valid latitude/longitude ranges
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Malformed upstream location identifier
    #[error(transparent)]
    InvalidLocationKey(#[from] InvalidLocationKey),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_city_name_error_message() {
        let err = DomainError::InvalidCityName("   ".to_string());
        assert_eq!(err.to_string(), "Invalid city name: \"   \"");
    }

    #[test]
    fn invalid_coordinates_is_transparent() {
        let err = DomainError::from(InvalidCoordinates);
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }
}
