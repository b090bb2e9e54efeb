//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/shiftcal/config.toml` by default. Command-line flags override
//! the file; see [`ClientConfig::apply_overrides`].
//!
//! ```toml
//! year = 2025
//! title = "🤓 - Arbejde"
//! output = "vagtplan.ics"
//! closing_hours = [22, 22, 23, 23, 2, 2, 22]
//!
//! [locations]
//! bar = "D'Wine Bar, Algade 54, 9000 Aalborg"
//! ```

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use shiftcal_core::{ClosingHours, ExtractOptions, LocationLabels};

use crate::cli::Cli;
use crate::error::{ClientError, ClientResult};

/// Default title for every exported event.
pub const DEFAULT_TITLE: &str = "🤓 - Arbejde";

/// Default output file for `export`.
pub const DEFAULT_OUTPUT: &str = "vagtplan.ics";

/// Configuration for the shiftcal client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Year for the DD/MM dates in a schedule.
    pub year: i32,

    /// Title for every exported event.
    pub title: String,

    /// Where `export` writes the calendar.
    pub output: PathBuf,

    /// Closing hour per weekday, Monday first.
    pub closing_hours: ClosingHours,

    /// Location labels.
    pub locations: LocationLabels,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            debug: false,
            year: Local::now().year(),
            title: DEFAULT_TITLE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            closing_hours: ClosingHours::default(),
            locations: LocationLabels::default(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shiftcal")
    }

    /// Applies the global command-line overrides and validates the result.
    pub fn apply_overrides(&mut self, cli: &Cli) -> ClientResult<()> {
        if cli.debug {
            self.debug = true;
        }
        if let Some(year) = cli.year {
            self.year = year;
        }
        if let Some(ref hours) = cli.closing_hours {
            self.closing_hours = ClosingHours::try_from(hours.clone())?;
        }
        self.validate()
    }

    /// Checks values the type system does not.
    pub fn validate(&self) -> ClientResult<()> {
        if !(1..=9999).contains(&self.year) {
            return Err(ClientError::Config(format!(
                "year must be between 1 and 9999, got {}",
                self.year
            )));
        }
        if self.title.trim().is_empty() {
            return Err(ClientError::Config("title must not be empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ClientError::Config("output must not be empty".to_string()));
        }
        Ok(())
    }

    /// Builds the options for an extraction run.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new(self.year)
            .with_closing_hours(self.closing_hours)
            .with_locations(self.locations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ClientConfig::parse("").unwrap();
        assert!(!config.debug);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.closing_hours, ClosingHours::default());
        assert_eq!(config.locations, LocationLabels::default());
        assert_eq!(config.year, Local::now().year());
    }

    #[test]
    fn full_file() {
        let config = ClientConfig::parse(
            r#"
year = 2025
title = "Vagt"
output = "out/jane.ics"
closing_hours = [21, 21, 21, 21, 1, 1, 20]

[locations]
moments = "Moments, baglokalet"
"#,
        )
        .unwrap();

        assert_eq!(config.year, 2025);
        assert_eq!(config.title, "Vagt");
        assert_eq!(config.output, PathBuf::from("out/jane.ics"));
        assert_eq!(config.closing_hours.as_array(), [21, 21, 21, 21, 1, 1, 20]);
        assert_eq!(config.locations.moments, "Moments, baglokalet");
        assert_eq!(config.locations.bar, LocationLabels::default().bar);

        let options = config.extract_options();
        assert_eq!(options.year, 2025);
        assert_eq!(options.closing_hours, config.closing_hours);
    }

    #[test]
    fn rejects_bad_closing_hours() {
        let err = ClientConfig::parse("closing_hours = [22, 22, 23]").unwrap_err();
        assert!(err.contains("7"), "{err}");

        let err = ClientConfig::parse("closing_hours = [22, 22, 23, 23, 2, 2, 24]").unwrap_err();
        assert!(err.contains("failed to parse config"), "{err}");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "year = 2024\ndebug = true\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.year, 2024);
        assert!(config.debug);

        let missing = ClientConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(missing.starts_with("failed to read config"));
    }

    #[test]
    fn overrides_from_cli() {
        let cli = Cli::try_parse_from([
            "shiftcal",
            "-v",
            "--year",
            "2026",
            "--closing-hours",
            "20,20,20,20,1,1,20",
            "names",
            "plan.txt",
        ])
        .unwrap();

        let mut config = ClientConfig::default();
        config.apply_overrides(&cli).unwrap();
        assert!(config.debug);
        assert_eq!(config.year, 2026);
        assert_eq!(config.closing_hours.as_array(), [20, 20, 20, 20, 1, 1, 20]);
    }

    #[test]
    fn override_with_wrong_length_fails() {
        let cli = Cli::try_parse_from(["shiftcal", "--closing-hours", "22,22", "names", "plan.txt"]).unwrap();
        let mut config = ClientConfig::default();
        assert!(matches!(config.apply_overrides(&cli), Err(ClientError::Config(_))));
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let cli = Cli::try_parse_from(["shiftcal", "--year", "262142", "names", "plan.txt"]).unwrap();
        let mut config = ClientConfig::default();
        let err = config.apply_overrides(&cli).unwrap_err();
        assert!(err.to_string().contains("year must be between 1 and 9999"), "{err}");
    }

    #[test]
    fn validate_checks_values() {
        assert!(ClientConfig::default().validate().is_ok());

        let config = ClientConfig {
            title: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            year: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
