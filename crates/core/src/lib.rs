//! Core types and configuration for the power position report.
//!
//! This crate provides shared types used across all other crates:
//! - Trade positions and their per-slot records
//! - Hourly summaries, quality reports and volume profiles
//! - Trade date validation and the intraday slot clock
//! - Configuration structures
//! - Common error types

pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod types;

pub use clock::{business_hour, hour_label, slot_labels, SlotTime};
pub use config::{BusinessDayConfig, Config, GenerationConfig, LeadingGapPolicy, OutputConfig};
pub use date::{format_trade_date, is_valid_date, is_valid_date_value, parse_trade_date};
pub use error::{Error, Result};
pub use types::*;
