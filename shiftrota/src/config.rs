use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use shiftrota::time::{BespokeCalendar, Date, HolidayCalendar, JointCalendar, Kuwait, NoHolidays};

/// Top-level shiftrota configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotaConfig {
    /// Cycle used when the command line names none.
    #[serde(default = "default_cycle")]
    pub cycle: String,

    /// Public-holiday source.
    #[serde(default)]
    pub holidays: HolidaySource,

    /// Look-ahead window used when no end date is given.
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Additional named days off, merged into the holiday source.
    #[serde(default)]
    pub extra_holidays: Vec<ExtraHoliday>,
}

impl Default for RotaConfig {
    fn default() -> Self {
        Self {
            cycle: default_cycle(),
            holidays: HolidaySource::default(),
            preset: default_preset(),
            extra_holidays: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HolidaySource {
    #[default]
    Kuwait,
    None,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtraHoliday {
    pub date: Date,
    pub name: String,
}

fn default_cycle() -> String {
    "A".to_string()
}
fn default_preset() -> String {
    "year".to_string()
}

impl RotaConfig {
    /// Read the configuration file at `path`.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file the user asked for explicitly is an error.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::parse(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Build the holiday provider described by this configuration.
    pub fn holiday_calendar(&self) -> Box<dyn HolidayCalendar> {
        let base: Box<dyn HolidayCalendar> = match self.holidays {
            HolidaySource::Kuwait => Box::new(Kuwait),
            HolidaySource::None => Box::new(NoHolidays),
        };
        if self.extra_holidays.is_empty() {
            return base;
        }
        let mut extra = BespokeCalendar::new("Configured");
        for h in &self.extra_holidays {
            extra.add_holiday(h.date, h.name.clone());
        }
        Box::new(JointCalendar::new(vec![base, Box::new(extra)]))
    }
}
