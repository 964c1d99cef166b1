use super::{LocationError, LocationOptions, LocationProvider};
use crate::models::Geolocation;
use async_trait::async_trait;

/// Always answers with the same reading (coordinates given on the command
/// line).
#[derive(Debug, Clone, Copy)]
pub struct FixedProvider {
    reading: Geolocation,
}

impl FixedProvider {
    pub fn new(reading: Geolocation) -> Result<Self, LocationError> {
        Ok(Self {
            reading: super::validate(reading)?,
        })
    }
}

#[async_trait]
impl LocationProvider for FixedProvider {
    fn is_supported(&self) -> bool {
        true
    }

    async fn locate(&self, _options: &LocationOptions) -> Result<Geolocation, LocationError> {
        Ok(self.reading)
    }
}

/// No location capability on this host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProvider;

#[async_trait]
impl LocationProvider for NoProvider {
    fn is_supported(&self) -> bool {
        false
    }

    async fn locate(&self, _options: &LocationOptions) -> Result<Geolocation, LocationError> {
        Err(LocationError::Unsupported)
    }
}
