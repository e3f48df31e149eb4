use crate::{
    error::LookupError,
    model::{Coordinates, Forecast},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod forecast;
pub mod geocoding;

/// Resolves a free-text place name to coordinates. One network round trip.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, query: &str) -> Result<Coordinates, LookupError>;
}

/// Fetches current and hourly weather for resolved coordinates. One network
/// round trip, no retry.
#[async_trait]
pub trait Forecaster: Send + Sync + Debug {
    async fn fetch(&self, coords: &Coordinates) -> Result<Forecast, LookupError>;
}

/// Construct the default provider pair backed by the Open-Meteo services.
pub fn default_providers() -> (Box<dyn Geocoder>, Box<dyn Forecaster>) {
    (
        Box::new(geocoding::OpenMeteoGeocoder::new()),
        Box::new(forecast::OpenMeteoForecaster::new()),
    )
}
