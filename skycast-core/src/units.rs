use std::str::FromStr;

/// Temperature display unit. Stored values are always Celsius; a `Unit`
/// only affects how a value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin]
    }

    /// Convert a stored Celsius value into this unit.
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => to_fahrenheit(celsius),
            Unit::Kelvin => to_kelvin(celsius),
        }
    }

    /// Render a stored Celsius value in this unit, e.g. `"21°C"` or `"70°F"`.
    ///
    /// Rounding happens here and only here, so switching units repeatedly
    /// never compounds rounding error into the stored value.
    pub fn render(&self, celsius: f64) -> String {
        format!("{}{}", self.from_celsius(celsius).round() as i64, self.symbol())
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "celsius" | "c" => Ok(Unit::Celsius),
            "fahrenheit" | "f" => Ok(Unit::Fahrenheit),
            "kelvin" | "k" => Ok(Unit::Kelvin),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: celsius, fahrenheit, kelvin."
            )),
        }
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_as_str_roundtrip() {
        for unit in Unit::all() {
            let s = unit.as_str();
            let parsed = Unit::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*unit, parsed);
        }
    }

    #[test]
    fn unknown_unit_error() {
        let err = Unit::try_from("rankine").unwrap_err();
        assert!(err.to_string().contains("Unknown unit"));
    }

    #[test]
    fn fahrenheit_conversion() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn kelvin_offset_is_exact() {
        for c in [-40.0, 0.0, 21.7, 100.0] {
            assert_eq!(to_kelvin(c) - c, 273.15);
        }
    }

    #[test]
    fn render_rounds_only_at_display_time() {
        assert_eq!(Unit::Celsius.render(21.4), "21°C");
        assert_eq!(Unit::Celsius.render(21.5), "22°C");
        assert_eq!(Unit::Fahrenheit.render(0.0), "32°F");
        assert_eq!(Unit::Kelvin.render(0.0), "273K");
    }

    #[test]
    fn switching_units_does_not_disturb_the_source_value() {
        let stored = 21.4;
        let original = Unit::Celsius.render(stored);

        // Cycle through every unit; the stored Celsius value is untouched.
        for unit in [Unit::Fahrenheit, Unit::Kelvin, Unit::Celsius] {
            let _ = unit.render(stored);
        }

        assert_eq!(Unit::Celsius.render(stored), original);
    }
}
