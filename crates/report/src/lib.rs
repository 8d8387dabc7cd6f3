//! Flat-file reporting for the power position report.
//!
//! This crate provides:
//! - Timestamped report file naming
//! - CSV rendering of summaries, profiles and quality tallies
//! - The batch driver tying generation, analysis and output together

pub mod naming;
pub mod writer;
pub mod driver;

pub use naming::ReportFiles;
pub use driver::{write_report, ReportDriver, RunSummary};
