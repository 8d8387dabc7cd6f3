//! Configuration structures for the power position report.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Main configuration for a report run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Synthetic trade generation.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Business day alignment.
    #[serde(default)]
    pub business_day: BusinessDayConfig,
    /// Flat-file output.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parse a configuration from TOML text. Missing sections keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that all sections are internally consistent.
    pub fn validate(&self) -> Result<()> {
        self.generation.validate()?;
        self.business_day.validate()
    }
}

/// Synthetic trade generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Minimum number of positions per run (inclusive).
    pub min_trades: usize,
    /// Maximum number of positions per run (inclusive).
    pub max_trades: usize,
    /// Width of one time slot in minutes.
    pub slot_minutes: u32,
    /// Smallest volume that can be drawn (inclusive).
    pub volume_min: u32,
    /// Largest volume that can be drawn (inclusive).
    pub volume_max: u32,
    /// Each time label and each volume is missing with probability 1/N.
    pub missing_one_in: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_trades: 1,
            max_trades: 100,
            slot_minutes: 5,
            volume_min: 0,
            volume_max: 499,
            missing_one_in: 15,
        }
    }
}

impl GenerationConfig {
    /// Number of slots in one day.
    pub fn slots_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.slot_minutes.max(1)) as usize
    }

    /// Number of distinct volumes that can be drawn.
    pub fn volume_range_len(&self) -> usize {
        (self.volume_max.saturating_sub(self.volume_min) as usize) + 1
    }

    /// Check the trade count range, slot width, volume range and missing rate.
    pub fn validate(&self) -> Result<()> {
        if self.min_trades == 0 || self.min_trades > self.max_trades {
            return Err(Error::config(format!(
                "trade count range [{}, {}] is empty or starts at zero",
                self.min_trades, self.max_trades
            )));
        }
        if self.slot_minutes == 0 || MINUTES_PER_DAY % self.slot_minutes != 0 {
            return Err(Error::config(format!(
                "slot_minutes {} does not divide a day",
                self.slot_minutes
            )));
        }
        if self.volume_min > self.volume_max {
            return Err(Error::config("volume_min exceeds volume_max"));
        }
        if self.volume_range_len() < self.slots_per_day() {
            return Err(Error::config(format!(
                "volume range holds {} values but {} distinct volumes are needed",
                self.volume_range_len(),
                self.slots_per_day()
            )));
        }
        if self.missing_one_in == 0 {
            return Err(Error::config("missing_one_in must be at least 1"));
        }
        Ok(())
    }
}

/// What to do when the first slot of a position has no time label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadingGapPolicy {
    /// Treat leading missing hours as hour 0 (the first slot of the grid).
    StartOfDay,
    /// Fail the position with a malformed record error.
    Reject,
}

/// Business day alignment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessDayConfig {
    /// Business hour is `(local hour + boundary_hour) % 24`; 23 moves local 00:00 into the 23:00 bucket.
    pub boundary_hour: u32,
    /// Policy for missing hours before the first labelled slot.
    pub leading_gap: LeadingGapPolicy,
}

impl Default for BusinessDayConfig {
    fn default() -> Self {
        Self {
            boundary_hour: 23,
            leading_gap: LeadingGapPolicy::StartOfDay,
        }
    }
}

impl BusinessDayConfig {
    /// Check that the boundary is an hour of the day.
    pub fn validate(&self) -> Result<()> {
        if self.boundary_hour > 23 {
            return Err(Error::config(format!(
                "boundary_hour {} is not an hour of the day",
                self.boundary_hour
            )));
        }
        Ok(())
    }
}

/// Flat-file output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the report files are written to.
    pub directory: PathBuf,
    /// Leading component of every file name.
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file_prefix: "PowerPosition".to_string(),
        }
    }
}
