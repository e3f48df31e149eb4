use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// A resolved location. Produced by the geocoder, immutable afterwards;
/// the session holds exactly one and replaces it wholesale on a new search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl Coordinates {
    /// Joins the available name fields, e.g. "Paris, Île-de-France, France".
    /// Absent optional fields are simply omitted, never replaced by a
    /// placeholder.
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        parts.extend(self.region.as_deref());
        parts.extend(self.country.as_deref());
        parts.join(", ")
    }
}

/// The current-instant fields of a forecast feed, before the presenter
/// derives the precipitation probability for "now".
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentInstant {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub weather_code: u8,
    pub is_day: bool,
    pub wind_speed: f64,
    pub wind_unit: String,
}

/// One entry of the hourly series.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub weather_code: u8,
}

/// A parsed forecast feed: current instant plus the index-aligned hourly
/// series. Replaced in full on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub current: CurrentInstant,
    pub hourly: Vec<HourlyEntry>,
    /// Hourly precipitation probability (%), index-aligned with `hourly`.
    pub precipitation_probability: Vec<u8>,
}

/// Current conditions as shown to the user. All temperatures stay Celsius;
/// unit conversion happens at render time only.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub weather_code: u8,
    pub is_day: bool,
    pub wind_speed: f64,
    pub wind_unit: String,
    pub precipitation_probability_pct: u8,
}

/// What the rendering surface consumes: the one-way contract out of the
/// presenter.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub location: String,
    /// Long-form date headline, e.g. "Friday, August 29, 2026".
    pub date: String,
    pub current: CurrentConditions,
    /// Contiguous slice of the hourly series, at most 24 entries, centered
    /// on the current hour and clamped at the series boundaries.
    pub window: Vec<HourlyEntry>,
    pub unit: Unit,
}
