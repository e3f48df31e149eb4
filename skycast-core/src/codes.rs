//! WMO weather code translation.
//!
//! Both lookups are total: an unrecognized code degrades to a fallback
//! instead of blocking rendering.

/// Human-readable label for a WMO weather code.
pub fn describe(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

/// Stable icon identifier for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ClearDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Default,
}

impl Icon {
    pub fn slug(&self) -> &'static str {
        match self {
            Icon::ClearDay => "clear-day",
            Icon::ClearNight => "clear-night",
            Icon::PartlyCloudyDay => "partly-cloudy-day",
            Icon::PartlyCloudyNight => "partly-cloudy-night",
            Icon::Cloudy => "cloudy",
            Icon::Fog => "fog",
            Icon::Rain => "rain",
            Icon::Snow => "snow",
            Icon::Thunderstorm => "thunderstorm",
            Icon::Default => "default",
        }
    }
}

/// Icon for a WMO weather code. Only the clear and partly-cloudy cases
/// distinguish day from night; everything else is day/night-invariant.
pub fn icon_for(code: u8, is_day: bool) -> Icon {
    match code {
        0 | 1 => {
            if is_day {
                Icon::ClearDay
            } else {
                Icon::ClearNight
            }
        }
        2 => {
            if is_day {
                Icon::PartlyCloudyDay
            } else {
                Icon::PartlyCloudyNight
            }
        }
        3 => Icon::Cloudy,
        45 | 48 => Icon::Fog,
        51..=57 | 61..=67 | 80..=82 => Icon::Rain,
        71..=77 | 85..=86 => Icon::Snow,
        95..=99 => Icon::Thunderstorm,
        _ => Icon::Default,
    }
}
