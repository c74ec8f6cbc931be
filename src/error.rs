//! Error types for geolocator
//!
//! This module defines custom error types using thiserror for better error handling.

use thiserror::Error;

/// Main error type for geolocator
#[derive(Error, Debug)]
pub enum GeoError {
    /// Any failure while requesting or decoding a geolocation answer
    #[error("Lookup failed: {0}")]
    LookupFailure(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for geolocator
pub type Result<T> = std::result::Result<T, GeoError>;

impl GeoError {
    /// Create a lookup failure
    pub fn lookup<S: Into<String>>(msg: S) -> Self {
        GeoError::LookupFailure(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        GeoError::ConfigError(msg.into())
    }

    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, GeoError::LookupFailure(_))
    }
}

/// Convert from anyhow::Error
impl From<anyhow::Error> for GeoError {
    fn from(err: anyhow::Error) -> Self {
        GeoError::Other(err.to_string())
    }
}
