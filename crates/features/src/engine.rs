//! Per-position analysis engine.
//!
//! Combines aggregation, profiling and quality scoring into one pass over a
//! trade position.

use crate::{aggregator::Aggregator, profile::VolumeProfiler, quality::QualityChecker};
use power_core::{Config, HourlySummary, QualityReport, Result, TradePosition, VolumeProfile};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// Everything derived from one trade position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    /// Identity of the source position.
    pub id: Uuid,
    /// Volume per business hour.
    pub summary: Vec<HourlySummary>,
    /// Statistics of the hourly volumes.
    pub profile: VolumeProfile,
    /// Data quality tallies.
    pub quality: QualityReport,
}

/// Analyzer producing a [`PositionReport`] per position.
#[derive(Debug, Clone)]
pub struct PositionAnalyzer {
    aggregator: Aggregator,
    profiler: VolumeProfiler,
    checker: QualityChecker,
}

impl PositionAnalyzer {
    /// Create a new analyzer from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            aggregator: Aggregator::new(&config.business_day),
            profiler: VolumeProfiler::new(),
            checker: QualityChecker::new(),
        }
    }

    /// Analyze a single position.
    pub fn analyze(&self, position: &TradePosition) -> Result<PositionReport> {
        let records = position.records()?;

        let summary = self.aggregator.summarise(&records)?;
        let profile = self.profiler.profile(&summary);
        let quality = self.checker.check(&records)?;

        debug!(
            id = %position.id,
            buckets = summary.len(),
            invalid_times = quality.time_interval.invalid,
            missing_volumes = quality.missing_volume.invalid,
            "Analyzed position"
        );

        Ok(PositionReport {
            id: position.id,
            summary,
            profile,
            quality,
        })
    }
}

impl Default for PositionAnalyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use power_core::{Error, LeadingGapPolicy};
    use power_ingestion::TradeGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_positions_analyze() {
        let config = Config::default();
        let mut rng = StdRng::seed_from_u64(21);
        let positions = TradeGenerator::new(config.generation.clone())
            .generate("01/03/2022", &mut rng)
            .unwrap();

        let analyzer = PositionAnalyzer::new(&config);
        for position in &positions {
            let report = analyzer.analyze(position).unwrap();
            assert_eq!(report.id, position.id);
            assert!(report.summary.len() <= 24);

            let present: u64 = position.volume_series.iter().flatten().map(|&v| u64::from(v)).sum();
            let total: u64 = report.summary.iter().map(|s| s.volume).sum();
            assert_eq!(total, present);

            let missing = position.volume_series.iter().filter(|v| v.is_none()).count();
            let counted: u32 = report.summary.iter().map(|s| s.missing_volumes).sum();
            assert_eq!(counted as usize, missing);

            for (_, counts) in report.quality.iter() {
                assert_eq!(counts.total, 288);
            }
            assert_eq!(report.profile.count, report.summary.len());
        }
    }

    #[test]
    fn test_length_mismatch_is_record_error() {
        let mut position = TradePosition {
            date: "01/03/2022".to_string(),
            time_series: vec![Some("00:00".to_string())],
            volume_series: vec![Some(1), Some(2)],
            id: Uuid::nil(),
        };
        let err = PositionAnalyzer::default().analyze(&position).unwrap_err();
        assert!(err.is_record_level());

        position.volume_series.pop();
        assert!(PositionAnalyzer::default().analyze(&position).is_ok());
    }

    #[test]
    fn test_reject_policy_propagates() {
        let mut config = Config::default();
        config.business_day.leading_gap = LeadingGapPolicy::Reject;

        let position = TradePosition {
            date: "01/03/2022".to_string(),
            time_series: vec![None, Some("00:05".to_string())],
            volume_series: vec![Some(1), Some(2)],
            id: Uuid::nil(),
        };
        let err = PositionAnalyzer::new(&config).analyze(&position).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { slot: 0, .. }));
    }
}
