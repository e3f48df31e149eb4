use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{Coordinates, CurrentInstant, Forecast, HourlyEntry},
};

use super::Forecaster;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,weather_code,is_day,wind_speed_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation_probability";

/// Forecast client backed by the Open-Meteo forecast service. The provider
/// resolves the time zone itself (`timezone=auto`), so hourly timestamps are
/// local to the requested coordinates.
#[derive(Debug, Clone, Default)]
pub struct OpenMeteoForecaster {
    http: Client,
}

impl OpenMeteoForecaster {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    current: CurrentPayload,
    current_units: CurrentUnits,
    hourly: HourlyPayload,
}

#[derive(Debug, Deserialize)]
struct CurrentPayload {
    temperature_2m: f64,
    apparent_temperature: f64,
    weather_code: u8,
    is_day: u8,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentUnits {
    wind_speed_10m: String,
}

#[derive(Debug, Deserialize)]
struct HourlyPayload {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<u8>,
    precipitation_probability: Vec<u8>,
}

/// Parse an Open-Meteo local timestamp such as "2026-08-29T14:00".
fn parse_hour(time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M").ok()
}

/// Turn the wire payload into the domain model, enforcing the parallel-array
/// invariant: `time`, `temperature_2m`, `weather_code` and
/// `precipitation_probability` must all share length and index alignment.
fn into_forecast(payload: ForecastPayload) -> Result<Forecast, LookupError> {
    let hourly = payload.hourly;
    let len = hourly.time.len();

    if hourly.temperature_2m.len() != len
        || hourly.weather_code.len() != len
        || hourly.precipitation_probability.len() != len
    {
        warn!(
            "hourly arrays misaligned: time={}, temperature={}, code={}, precipitation={}",
            len,
            hourly.temperature_2m.len(),
            hourly.weather_code.len(),
            hourly.precipitation_probability.len(),
        );
        return Err(LookupError::WeatherUnavailable);
    }

    let mut entries = Vec::with_capacity(len);
    for ((time, temperature_c), weather_code) in hourly
        .time
        .iter()
        .zip(hourly.temperature_2m)
        .zip(hourly.weather_code)
    {
        let time = parse_hour(time).ok_or_else(|| {
            warn!("unparseable hourly timestamp '{time}'");
            LookupError::WeatherUnavailable
        })?;
        entries.push(HourlyEntry { time, temperature_c, weather_code });
    }

    Ok(Forecast {
        current: CurrentInstant {
            temperature_c: payload.current.temperature_2m,
            feels_like_c: payload.current.apparent_temperature,
            weather_code: payload.current.weather_code,
            is_day: payload.current.is_day != 0,
            wind_speed: payload.current.wind_speed_10m,
            wind_unit: payload.current_units.wind_speed_10m,
        },
        hourly: entries,
        precipitation_probability: hourly.precipitation_probability,
    })
}

#[async_trait]
impl Forecaster for OpenMeteoForecaster {
    async fn fetch(&self, coords: &Coordinates) -> Result<Forecast, LookupError> {
        debug!("fetching forecast for {:.4},{:.4}", coords.latitude, coords.longitude);

        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", coords.latitude.to_string().as_str()),
                ("longitude", coords.longitude.to_string().as_str()),
                ("current", CURRENT_FIELDS),
                ("hourly", HOURLY_FIELDS),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("forecast request failed: {e}");
                LookupError::WeatherUnavailable
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!("forecast request failed with status {status}");
            return Err(LookupError::WeatherUnavailable);
        }

        let parsed: ForecastPayload = res.json().await.map_err(|e| {
            warn!("failed to decode forecast response: {e}");
            LookupError::WeatherUnavailable
        })?;

        into_forecast(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    const FEED: &str = r#"{
        "latitude": 48.86,
        "longitude": 2.34,
        "utc_offset_seconds": 7200,
        "timezone": "Europe/Paris",
        "current_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "apparent_temperature": "°C",
            "weather_code": "wmo code",
            "is_day": "",
            "wind_speed_10m": "km/h"
        },
        "current": {
            "time": "2026-08-29T14:15",
            "temperature_2m": 22.6,
            "apparent_temperature": 24.1,
            "weather_code": 2,
            "is_day": 1,
            "wind_speed_10m": 11.3
        },
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "weather_code": "wmo code",
            "precipitation_probability": "%"
        },
        "hourly": {
            "time": ["2026-08-29T00:00", "2026-08-29T01:00", "2026-08-29T02:00"],
            "temperature_2m": [17.2, 16.8, 16.5],
            "weather_code": [1, 2, 61],
            "precipitation_probability": [5, 10, 65]
        }
    }"#;

    #[test]
    fn parses_a_complete_feed() {
        let payload: ForecastPayload = serde_json::from_str(FEED).expect("valid fixture");
        let forecast = into_forecast(payload).expect("aligned arrays");

        assert!((forecast.current.temperature_c - 22.6).abs() < 1e-9);
        assert!((forecast.current.feels_like_c - 24.1).abs() < 1e-9);
        assert_eq!(forecast.current.weather_code, 2);
        assert!(forecast.current.is_day);
        assert_eq!(forecast.current.wind_unit, "km/h");

        assert_eq!(forecast.hourly.len(), 3);
        assert_eq!(forecast.precipitation_probability, vec![5, 10, 65]);

        let first = &forecast.hourly[0];
        assert_eq!(first.time.date(), NaiveDate::from_ymd_opt(2026, 8, 29).unwrap());
        assert_eq!(first.time.hour(), 0);
        assert_eq!(forecast.hourly[2].weather_code, 61);
    }

    #[test]
    fn misaligned_arrays_are_rejected() {
        let payload: ForecastPayload = serde_json::from_str(FEED).expect("valid fixture");
        let mut hourly = payload.hourly;
        hourly.temperature_2m.pop();
        let broken = ForecastPayload {
            current: payload.current,
            current_units: payload.current_units,
            hourly,
        };

        assert_eq!(into_forecast(broken), Err(LookupError::WeatherUnavailable));
    }

    #[test]
    fn unparseable_timestamp_is_rejected() {
        let payload: ForecastPayload = serde_json::from_str(FEED).expect("valid fixture");
        let mut hourly = payload.hourly;
        hourly.time[1] = "not-a-time".to_string();
        let broken = ForecastPayload {
            current: payload.current,
            current_units: payload.current_units,
            hourly,
        };

        assert_eq!(into_forecast(broken), Err(LookupError::WeatherUnavailable));
    }

    #[test]
    fn parse_hour_handles_open_meteo_local_times() {
        let t = parse_hour("2026-08-29T23:00").expect("valid");
        assert_eq!(t.hour(), 23);
        assert!(parse_hour("2026-08-29 23:00").is_none());
    }
}
