//! The location-resolution-and-weather-rendering pipeline.
//!
//! `Presenter` orchestrates geocode -> fetch -> transform and hands the
//! rendering surface a [`DisplayModel`]. It never touches a UI itself.

use chrono::{Local, NaiveDateTime, Timelike};
use log::debug;

use crate::{
    error::LookupError,
    model::{Coordinates, CurrentConditions, DisplayModel, Forecast},
    provider::{Forecaster, Geocoder},
    units::Unit,
};

/// Everything resolved by the last successful search. Replaced wholesale on
/// each success, never patched in place.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub coordinates: Coordinates,
    pub forecast: Forecast,
}

/// Orchestrates the search flow. Searches are serialized through `&mut self`,
/// so a superseded request can never commit over a newer result.
#[derive(Debug)]
pub struct Presenter {
    geocoder: Box<dyn Geocoder>,
    forecaster: Box<dyn Forecaster>,
    unit: Unit,
    state: Option<SessionState>,
}

impl Presenter {
    pub fn new(geocoder: Box<dyn Geocoder>, forecaster: Box<dyn Forecaster>, unit: Unit) -> Self {
        Self { geocoder, forecaster, unit, state: None }
    }

    /// Presenter wired to the Open-Meteo services.
    pub fn with_default_providers(unit: Unit) -> Self {
        let (geocoder, forecaster) = crate::provider::default_providers();
        Self::new(geocoder, forecaster, unit)
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Coordinates of the last successful search, if any.
    pub fn location(&self) -> Option<&Coordinates> {
        self.state.as_ref().map(|s| &s.coordinates)
    }

    /// Resolve a free-text query and fetch its weather.
    ///
    /// # Errors
    ///
    /// Empty queries are rejected before any network call; a geocoding miss
    /// stops the flow before the forecaster is ever invoked.
    pub async fn search(&mut self, query: &str) -> Result<DisplayModel, LookupError> {
        self.search_at(query, Local::now().naive_local()).await
    }

    /// Re-fetch weather for the last resolved location without re-geocoding,
    /// preserving the originally resolved location identity even if the place
    /// name is ambiguous.
    pub async fn refresh(&mut self) -> Result<DisplayModel, LookupError> {
        self.refresh_at(Local::now().naive_local()).await
    }

    /// Switch the display unit and re-derive the model from the stored
    /// Celsius values. No network call.
    pub fn set_unit(&mut self, unit: Unit) -> Option<DisplayModel> {
        self.unit = unit;
        self.state
            .as_ref()
            .map(|state| build_model(state, unit, Local::now().naive_local()))
    }

    pub(crate) async fn search_at(
        &mut self,
        query: &str,
        now: NaiveDateTime,
    ) -> Result<DisplayModel, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let coordinates = self.geocoder.resolve(query).await?;
        debug!("resolved '{}' to {}", query, coordinates.display_name());

        self.fetch_and_commit(coordinates, now).await
    }

    pub(crate) async fn refresh_at(
        &mut self,
        now: NaiveDateTime,
    ) -> Result<DisplayModel, LookupError> {
        let coordinates = self
            .state
            .as_ref()
            .map(|s| s.coordinates.clone())
            .ok_or(LookupError::NoLocation)?;

        self.fetch_and_commit(coordinates, now).await
    }

    /// On failure the previous session state is left in place, so a later
    /// refresh still targets the last successfully resolved location.
    async fn fetch_and_commit(
        &mut self,
        coordinates: Coordinates,
        now: NaiveDateTime,
    ) -> Result<DisplayModel, LookupError> {
        let forecast = self.forecaster.fetch(&coordinates).await?;

        let state = SessionState { coordinates, forecast };
        let model = build_model(&state, self.unit, now);
        self.state = Some(state);

        Ok(model)
    }
}

/// Bounds of the hourly display window: up to 24 entries centered on the
/// current hour (12 before, 12 after), clamped at the series boundaries.
pub(crate) fn window_bounds(hour_index: usize, len: usize) -> (usize, usize) {
    let start = hour_index.saturating_sub(12);
    let end = (start + 24).min(len);
    (start, end)
}

/// Index of the current local hour in the series. Falls back to hour-of-day
/// (the series starts at local midnight) when no timestamp matches.
fn locate_hour(forecast: &Forecast, now: NaiveDateTime) -> usize {
    forecast
        .hourly
        .iter()
        .position(|e| e.time.date() == now.date() && e.time.hour() == now.hour())
        .unwrap_or_else(|| {
            (now.hour() as usize).min(forecast.hourly.len().saturating_sub(1))
        })
}

/// Precipitation probability for "now", indexed by hour-of-day. An
/// out-of-range index is an expected boundary and reads as 0.
fn precipitation_now(probabilities: &[u8], hour_of_day: usize) -> u8 {
    probabilities.get(hour_of_day).copied().unwrap_or(0)
}

fn format_date(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

fn build_model(state: &SessionState, unit: Unit, now: NaiveDateTime) -> DisplayModel {
    let forecast = &state.forecast;

    let current = CurrentConditions {
        temperature_c: forecast.current.temperature_c,
        feels_like_c: forecast.current.feels_like_c,
        weather_code: forecast.current.weather_code,
        is_day: forecast.current.is_day,
        wind_speed: forecast.current.wind_speed,
        wind_unit: forecast.current.wind_unit.clone(),
        precipitation_probability_pct: precipitation_now(
            &forecast.precipitation_probability,
            now.hour() as usize,
        ),
    };

    let (start, end) = window_bounds(locate_hour(forecast, now), forecast.hourly.len());

    DisplayModel {
        location: state.coordinates.display_name(),
        date: format_date(now),
        current,
        window: forecast.hourly[start..end].to_vec(),
        unit,
    }
}
