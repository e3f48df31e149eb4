//! Core library for the `skycast` weather lookup tool.
//!
//! This crate defines:
//! - Unit conversion and WMO weather-code translation
//! - Geocoding & forecast clients behind provider traits
//! - The presenter that turns a free-text search into a display model
//! - Preference (consent + unit) persistence
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services; nothing in here touches a UI.

pub mod codes;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod units;

pub use codes::{Icon, describe, icon_for};
pub use config::{Config, Consent};
pub use error::LookupError;
pub use model::{Coordinates, CurrentConditions, DisplayModel, Forecast, HourlyEntry};
pub use presenter::Presenter;
pub use provider::{Forecaster, Geocoder};
pub use units::Unit;
