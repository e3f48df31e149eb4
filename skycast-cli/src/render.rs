//! The rendering surface: paints a [`DisplayModel`], consumes nothing else.

use chrono::Timelike;
use skycast_core::{DisplayModel, Icon, LookupError, codes};

pub fn render(model: &DisplayModel) {
    let current = &model.current;
    let icon = codes::icon_for(current.weather_code, current.is_day);

    println!();
    println!("{}", model.location);
    println!("{}", model.date);
    println!();
    println!(
        "  {}  {}  (feels like {})",
        glyph(icon),
        model.unit.render(current.temperature_c),
        model.unit.render(current.feels_like_c),
    );
    println!("  {}", codes::describe(current.weather_code));
    println!(
        "  Wind {} {}   Precipitation {}%",
        current.wind_speed, current.wind_unit, current.precipitation_probability_pct,
    );

    if !model.window.is_empty() {
        println!();
        for entry in &model.window {
            // The hourly feed carries no day flag; approximate from the hour.
            let is_day = (6..20).contains(&entry.time.hour());
            println!(
                "  {}  {}  {}",
                entry.time.format("%H:%M"),
                glyph(codes::icon_for(entry.weather_code, is_day)),
                model.unit.render(entry.temperature_c),
            );
        }
    }
    println!();
}

/// An error message replaces the whole weather display; there is no mixed
/// state.
pub fn render_error(err: &LookupError) {
    println!();
    println!("{err}");
    println!();
}

fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ClearDay => "☀️",
        Icon::ClearNight => "🌙",
        Icon::PartlyCloudyDay => "⛅",
        Icon::PartlyCloudyNight => "🌥️",
        Icon::Cloudy => "☁️",
        Icon::Fog => "🌫️",
        Icon::Rain => "🌧️",
        Icon::Snow => "❄️",
        Icon::Thunderstorm => "⛈️",
        Icon::Default => "🌡️",
    }
}
