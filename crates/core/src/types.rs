//! Core data types for the power position report.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Traded volume in one slot.
pub type Volume = u32;

/// A simulated open position across the intraday slots of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePosition {
    /// Trade date in `DD/MM/YYYY` form.
    pub date: String,
    /// `HH:MM` label per slot; `None` when missing.
    pub time_series: Vec<Option<String>>,
    /// Volume per slot, positionally matching `time_series`; `None` when missing.
    pub volume_series: Vec<Option<Volume>>,
    /// Opaque identity.
    pub id: Uuid,
}

impl TradePosition {
    /// Expand the position into one row per slot.
    pub fn records(&self) -> Result<Vec<SlotRecord>> {
        if self.time_series.len() != self.volume_series.len() {
            let slot = self.time_series.len().min(self.volume_series.len());
            return Err(Error::malformed(
                slot,
                format!(
                    "{} time labels but {} volumes",
                    self.time_series.len(),
                    self.volume_series.len()
                ),
            ));
        }

        Ok(self
            .time_series
            .iter()
            .zip(&self.volume_series)
            .map(|(time, volume)| SlotRecord {
                date: self.date.clone(),
                time: time.clone(),
                volume: *volume,
            })
            .collect())
    }
}

/// One slot of a trade position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Trade date in `DD/MM/YYYY` form.
    pub date: String,
    /// `HH:MM` label, if present.
    pub time: Option<String>,
    /// Volume, if present.
    pub volume: Option<Volume>,
}

/// Total volume for one business hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySummary {
    /// Business-hour label (`HH:00`).
    pub local_time: String,
    /// Sum of the present volumes in the bucket.
    pub volume: u64,
    /// Slots in the bucket whose volume was missing.
    pub missing_volumes: u32,
}

/// Valid/invalid tallies of one quality check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCounts {
    pub valid: usize,
    pub invalid: usize,
    pub total: usize,
}

impl CheckCounts {
    /// Count one row.
    #[inline]
    pub fn record(&mut self, is_valid: bool) {
        if is_valid {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
        self.total += 1;
    }
}

/// Named data quality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityCheck {
    /// Time label present.
    TimeInterval,
    /// Date field parses as a trade date.
    TimeFormat,
    /// Volume present.
    MissingVolume,
}

impl QualityCheck {
    /// All checks in report order.
    pub const ALL: [QualityCheck; 3] = [
        QualityCheck::TimeInterval,
        QualityCheck::TimeFormat,
        QualityCheck::MissingVolume,
    ];

    /// Display name used in report headers.
    pub fn name(self) -> &'static str {
        match self {
            QualityCheck::TimeInterval => "Time Interval Check",
            QualityCheck::TimeFormat => "Correct Time Format",
            QualityCheck::MissingVolume => "Missing Volume Values",
        }
    }
}

/// Data quality tallies for one position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub time_interval: CheckCounts,
    pub time_format: CheckCounts,
    pub missing_volume: CheckCounts,
}

impl QualityReport {
    /// Counts of a single check.
    pub fn get(&self, check: QualityCheck) -> CheckCounts {
        match check {
            QualityCheck::TimeInterval => self.time_interval,
            QualityCheck::TimeFormat => self.time_format,
            QualityCheck::MissingVolume => self.missing_volume,
        }
    }

    /// Checks with their counts, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (QualityCheck, CheckCounts)> + '_ {
        QualityCheck::ALL.into_iter().map(|check| (check, self.get(check)))
    }
}

/// Descriptive statistics of the hourly volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeProfile {
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl VolumeProfile {
    /// Statistics with their row labels, in report order.
    pub fn rows(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("count", Some(self.count as f64)),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.p25),
            ("50%", self.p50),
            ("75%", self.p75),
            ("max", self.max),
        ]
    }
}
