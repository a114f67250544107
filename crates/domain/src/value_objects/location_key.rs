//! Location key value object
//!
//! # Examples
//!
//! ```
//! use domain::LocationKey;
//!
//! // Keys come from the upstream location search endpoints
//! let key = LocationKey::new("294021").unwrap();
//! assert_eq!(key.as_str(), "294021");
//!
//! // Blank keys are rejected
//! assert!(LocationKey::new("").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a location key is blank
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("location key must not be empty")]
pub struct InvalidLocationKey;

/// An opaque location identifier issued by the upstream weather service
///
/// Keys are only meaningful to the upstream API: obtained from a city or
/// geoposition search and passed verbatim to the forecast endpoint. No
/// uniqueness or lifecycle guarantees are assumed, and keys are never
/// cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    /// Create a location key from an upstream identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocationKey` if the value is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidLocationKey> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(InvalidLocationKey);
        }
        Ok(Self(value))
    }

    /// Get the key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<LocationKey> for String {
    fn from(key: LocationKey) -> Self {
        key.0
    }
}

impl TryFrom<String> for LocationKey {
    type Error = InvalidLocationKey;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
