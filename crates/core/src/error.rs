//! Error types for the power position report.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the power position report.
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied trade date is not a `DD/MM/YYYY` calendar date.
    #[error("The supplied date {0} is invalid. Please supply a date in the format d/m/Y.")]
    InvalidDate(String),

    /// A single trade position cannot be processed.
    #[error("Malformed record at slot {slot}: {reason}")]
    MalformedRecord {
        /// Zero-based slot index within the position.
        slot: usize,
        /// What is wrong with the slot.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML configuration parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid date error.
    pub fn invalid_date(date: impl Into<String>) -> Self {
        Error::InvalidDate(date.into())
    }

    /// Create a malformed record error.
    pub fn malformed(slot: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            slot,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether this error only affects a single position.
    pub fn is_record_level(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. })
    }
}
