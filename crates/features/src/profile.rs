//! Descriptive statistics of summarised volumes.
//!
//! Mirrors a "describe" table: count, mean, sample standard deviation, min,
//! quartiles and max over the bucket volumes of one position.

use power_core::{HourlySummary, VolumeProfile};
use statrs::statistics::Statistics;

/// Profiler of hourly volume buckets.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeProfiler;

impl VolumeProfiler {
    /// Create a new profiler.
    pub fn new() -> Self {
        Self
    }

    /// Profile the bucket volumes of a summary.
    pub fn profile(&self, summary: &[HourlySummary]) -> VolumeProfile {
        let mut volumes: Vec<f64> = summary.iter().map(|s| s.volume as f64).collect();
        if volumes.is_empty() {
            return VolumeProfile::default();
        }

        let mean = finite(volumes.iter().mean());
        let std = finite(volumes.iter().std_dev());

        volumes.sort_by(f64::total_cmp);

        VolumeProfile {
            count: volumes.len(),
            mean,
            std,
            min: volumes.first().copied(),
            p25: quantile(&volumes, 0.25),
            p50: quantile(&volumes, 0.50),
            p75: quantile(&volumes, 0.75),
            max: volumes.last().copied(),
        }
    }
}

/// Linear interpolation between the closest ranks of sorted data.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Statistics are NaN when undefined (e.g. std of one value).
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
