//! Intraday slot clock and business-hour alignment.

use crate::error::{Error, Result};

/// Hours in a day.
pub const HOURS_PER_DAY: u32 = 24;

/// Hour and minute decomposed from an `HH:MM` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime {
    pub hour: u32,
    pub minute: u32,
}

impl SlotTime {
    /// Split a time label on `:` into hour and minute.
    ///
    /// `slot` only locates the error.
    pub fn parse(label: &str, slot: usize) -> Result<Self> {
        let (hour, minute) = label
            .split_once(':')
            .ok_or_else(|| Error::malformed(slot, format!("time label {label:?} has no ':'")))?;

        let hour = parse_component(hour, 23)
            .ok_or_else(|| Error::malformed(slot, format!("invalid hour in {label:?}")))?;
        let minute = parse_component(minute, 59)
            .ok_or_else(|| Error::malformed(slot, format!("invalid minute in {label:?}")))?;

        Ok(Self { hour, minute })
    }
}

fn parse_component(text: &str, max: u32) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u32>().ok().filter(|&v| v <= max)
}

/// Build the `HH:MM` labels of a full day at `slot_minutes` resolution.
pub fn slot_labels(slot_minutes: u32) -> Vec<String> {
    let step = slot_minutes.max(1) as usize;
    (0..24 * 60)
        .step_by(step)
        .map(|minute| format!("{:02}:{:02}", minute / 60, minute % 60))
        .collect()
}

/// Shift a local hour onto the business clock.
///
/// With `boundary_hour` 23, local hour 0 becomes 23 and local hour 1 becomes 0.
#[inline]
pub fn business_hour(local_hour: u32, boundary_hour: u32) -> u32 {
    (local_hour % HOURS_PER_DAY + boundary_hour % HOURS_PER_DAY) % HOURS_PER_DAY
}

/// Format a business hour as an `HH:00` bucket label.
#[inline]
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}
