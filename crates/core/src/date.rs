//! Trade date validation.
//!
//! Trade dates travel as `DD/MM/YYYY` strings. Validation is a direct parse
//! into a [`NaiveDate`], so every failure is just `None`.

use chrono::NaiveDate;
use serde_json::Value;

/// Display format of a trade date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a strict `DD/MM/YYYY` date.
///
/// Exactly two day digits, two month digits and four year digits separated by
/// `/`; the triple must name a real calendar day.
pub fn parse_trade_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }

    let day = digits(&bytes[0..2])?;
    let month = digits(&bytes[3..5])?;
    let year = digits(&bytes[6..10])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Whether `value` is a valid trade date.
pub fn is_valid_date(value: &str) -> bool {
    parse_trade_date(value).is_some()
}

/// Whether a loosely-typed value is a valid trade date. Non-strings are never valid.
pub fn is_valid_date_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_date)
}

/// Format a date the way trade positions carry it.
pub fn format_trade_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
