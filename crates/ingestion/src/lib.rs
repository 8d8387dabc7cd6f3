//! Trade position ingestion for the power position report.
//!
//! This crate handles:
//! - Trade date gating
//! - Synthetic intraday position generation

pub mod generator;

pub use generator::{generate_trades, TradeGenerator};
