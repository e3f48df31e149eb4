use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::units::Unit;

/// The persisted consent flag. This is the only thing allowed to outlive a
/// session besides the unit preference it gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }
}

impl std::fmt::Display for Consent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Consent {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "accepted" => Ok(Consent::Accepted),
            "declined" => Ok(Consent::Declined),
            _ => Err(anyhow!("Unknown consent value '{value}'.")),
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// "accepted" or "declined"; absent until the user has been asked.
    pub consent: Option<String>,

    /// Preferred display unit, e.g. "celsius" or "fahrenheit".
    pub default_unit: Option<String>,
}

impl Config {
    /// The stored consent decision, if the user has made one. A corrupted
    /// value reads as undecided so the prompt simply shows again.
    pub fn consent(&self) -> Option<Consent> {
        self.consent.as_deref().and_then(|s| Consent::try_from(s).ok())
    }

    pub fn set_consent(&mut self, consent: Consent) {
        self.consent = Some(consent.as_str().to_string());
    }

    /// Return the preferred unit as a strongly-typed Unit. Unset means
    /// Celsius, the source-of-truth unit.
    pub fn unit(&self) -> Result<Unit> {
        match self.default_unit.as_deref() {
            None => Ok(Unit::default()),
            Some(s) => Unit::try_from(s).with_context(|| {
                format!(
                    "Invalid default_unit '{s}' in config.\n\
                     Hint: run `skycast configure` to pick a unit."
                )
            }),
        }
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.default_unit = Some(unit.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_config_has_no_consent_and_defaults_to_celsius() {
        let cfg = Config::default();

        assert_eq!(cfg.consent(), None);
        assert_eq!(cfg.unit().expect("default unit"), Unit::Celsius);
    }

    #[test]
    fn consent_round_trips_through_the_stored_string() {
        let mut cfg = Config::default();

        cfg.set_consent(Consent::Accepted);
        assert_eq!(cfg.consent, Some("accepted".to_string()));
        assert_eq!(cfg.consent(), Some(Consent::Accepted));

        cfg.set_consent(Consent::Declined);
        assert_eq!(cfg.consent(), Some(Consent::Declined));
    }

    #[test]
    fn corrupted_consent_reads_as_undecided() {
        let cfg = Config { consent: Some("maybe".to_string()), ..Config::default() };
        assert_eq!(cfg.consent(), None);
    }

    #[test]
    fn unit_round_trips_and_invalid_unit_hints_at_configure() {
        let mut cfg = Config::default();

        cfg.set_unit(Unit::Fahrenheit);
        assert_eq!(cfg.unit().expect("valid unit"), Unit::Fahrenheit);

        cfg.default_unit = Some("rankine".to_string());
        let err = cfg.unit().unwrap_err();
        assert!(err.to_string().contains("Hint: run `skycast configure`"));
    }

    #[test]
    fn config_serializes_to_toml_and_back() {
        let mut cfg = Config::default();
        cfg.set_consent(Consent::Accepted);
        cfg.set_unit(Unit::Kelvin);

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&toml).expect("parse");

        assert_eq!(parsed.consent(), Some(Consent::Accepted));
        assert_eq!(parsed.unit().expect("valid unit"), Unit::Kelvin);
    }
}
