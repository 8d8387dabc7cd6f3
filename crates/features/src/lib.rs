//! Feature computation for the power position report.
//!
//! This crate handles:
//! - Business-hour realignment and hourly volume aggregation
//! - Data quality scoring
//! - Volume profiling of the hourly summary
//! - Per-position analysis combining the above

pub mod aggregator;
pub mod quality;
pub mod profile;
pub mod engine;

pub use aggregator::{summarise, Aggregator};
pub use quality::{check_quality, QualityChecker};
pub use profile::VolumeProfiler;
pub use engine::{PositionAnalyzer, PositionReport};
