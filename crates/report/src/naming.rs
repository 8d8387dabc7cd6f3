//! Report file naming.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Paths of the three files written for one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFiles {
    /// Hourly volume summary.
    pub summary: PathBuf,
    /// Descriptive statistics of the summary.
    pub profiling: PathBuf,
    /// Data quality tallies.
    pub quality: PathBuf,
}

impl ReportFiles {
    /// Build the file set for position `seq` (1-based) of a run generated at `generated_at`.
    ///
    /// `{prefix}_{YYYYMMDD}_{HHMM}_{seq:03}.csv` plus `_data_profiling` and
    /// `_data_quality` variants.
    pub fn new(directory: &Path, prefix: &str, generated_at: NaiveDateTime, seq: usize) -> Self {
        let stem = format!("{}_{}_{:03}", prefix, generated_at.format("%Y%m%d_%H%M"), seq);
        Self {
            summary: directory.join(format!("{stem}.csv")),
            profiling: directory.join(format!("{stem}_data_profiling.csv")),
            quality: directory.join(format!("{stem}_data_quality.csv")),
        }
    }

    /// All paths in write order.
    pub fn paths(&self) -> [&Path; 3] {
        [&self.summary, &self.profiling, &self.quality]
    }
}
