//! Location acquisition. The controller only sees the [`LocationProvider`]
//! trait; where a reading actually comes from is up to the implementation.

mod command;
mod fixed;

pub use command::CommandProvider;
pub use fixed::{FixedProvider, NoProvider};

use crate::models::Geolocation;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_LOCATION_TIMEOUT_MS: u64 = 10_000;

/// Request options handed to the provider on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOptions {
    /// Ask for the best fix available. Providers may ignore it.
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached reading the provider may return. Zero forces a fresh fix.
    pub max_cached_age: Duration,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self::with_timeout_ms(DEFAULT_LOCATION_TIMEOUT_MS)
    }
}

impl LocationOptions {
    pub fn with_timeout_ms(ms: u64) -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(ms),
            max_cached_age: Duration::ZERO,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("User denied the request for geolocation: {0}")]
    PermissionDenied(String),

    #[error("Timeout expired after {0} ms")]
    Timeout(u64),

    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Capability check, evaluated before any request is made.
    fn is_supported(&self) -> bool;

    /// One-shot request for a fresh reading.
    async fn locate(&self, options: &LocationOptions) -> Result<Geolocation, LocationError>;
}

/// Range check shared by providers that parse external input.
pub fn validate(geo: Geolocation) -> Result<Geolocation, LocationError> {
    if !(-90.0..=90.0).contains(&geo.latitude) {
        return Err(LocationError::Unavailable(format!(
            "latitude out of range: {}",
            geo.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&geo.longitude) {
        return Err(LocationError::Unavailable(format!(
            "longitude out of range: {}",
            geo.longitude
        )));
    }
    if !geo.accuracy_meters.is_finite() || geo.accuracy_meters < 0.0 {
        return Err(LocationError::Unavailable(format!(
            "invalid accuracy: {}",
            geo.accuracy_meters
        )));
    }
    Ok(geo)
}
