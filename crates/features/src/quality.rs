//! Data quality scoring of slot records.

use power_core::{is_valid_date, CheckCounts, QualityReport, Result, SlotRecord, SlotTime};

/// Tallies valid and invalid rows across the three quality checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualityChecker;

impl QualityChecker {
    /// Create a new quality checker.
    pub fn new() -> Self {
        Self
    }

    /// Score every record.
    ///
    /// A missing time label is an invalid row; a label that is present but not
    /// `HH:MM` fails the whole position.
    pub fn check(&self, records: &[SlotRecord]) -> Result<QualityReport> {
        let mut time_interval = CheckCounts::default();
        let mut time_format = CheckCounts::default();
        let mut missing_volume = CheckCounts::default();

        for (slot, record) in records.iter().enumerate() {
            let has_time = match record.time.as_deref() {
                Some(label) => {
                    SlotTime::parse(label, slot)?;
                    true
                }
                None => false,
            };
            time_interval.record(has_time);

            time_format.record(is_valid_date(&record.date));

            missing_volume.record(record.volume.is_some());
        }

        Ok(QualityReport {
            time_interval,
            time_format,
            missing_volume,
        })
    }
}

/// Score records with a default checker.
pub fn check_quality(records: &[SlotRecord]) -> Result<QualityReport> {
    QualityChecker::new().check(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use power_core::{slot_labels, Error, QualityCheck};

    fn clean_day(date: &str) -> Vec<SlotRecord> {
        slot_labels(5)
            .into_iter()
            .enumerate()
            .map(|(k, label)| SlotRecord {
                date: date.to_string(),
                time: Some(label),
                volume: Some(k as u32),
            })
            .collect()
    }

    #[test]
    fn test_clean_day_all_valid() {
        let report = check_quality(&clean_day("01/03/2022")).unwrap();
        let expected = CheckCounts { valid: 288, invalid: 0, total: 288 };
        for check in QualityCheck::ALL {
            assert_eq!(report.get(check), expected);
        }
    }

    #[test]
    fn test_invalid_date_fails_every_row() {
        let report = check_quality(&clean_day("29/02/2021")).unwrap();
        assert_eq!(report.time_format, CheckCounts { valid: 0, invalid: 288, total: 288 });
        assert_eq!(report.time_interval.valid, 288);
    }

    #[test]
    fn test_missing_values_counted() {
        let mut records = clean_day("01/03/2022");
        records[0].time = None;
        records[5].time = None;
        records[7].volume = None;

        let report = check_quality(&records).unwrap();
        assert_eq!(report.time_interval, CheckCounts { valid: 286, invalid: 2, total: 288 });
        assert_eq!(report.missing_volume, CheckCounts { valid: 287, invalid: 1, total: 288 });
        assert_eq!(report.time_format.valid, 288);
    }

    #[test]
    fn test_mixed_dates_checked_per_row() {
        let mut records = clean_day("01/03/2022");
        records[10].date = "31/02/2022".to_string();
        records[11].date = "bogus".to_string();

        let report = check_quality(&records).unwrap();
        assert_eq!(report.time_format, CheckCounts { valid: 286, invalid: 2, total: 288 });
    }

    #[test]
    fn test_counts_always_add_up() {
        let mut records = clean_day("01/03/2022");
        for record in records.iter_mut().step_by(3) {
            record.volume = None;
        }
        let report = check_quality(&records).unwrap();
        for (_, counts) in report.iter() {
            assert_eq!(counts.valid + counts.invalid, counts.total);
            assert_eq!(counts.total, records.len());
        }
    }

    #[test]
    fn test_malformed_label_fails() {
        let mut records = clean_day("01/03/2022");
        records[3].time = Some("noon".to_string());
        let err = check_quality(&records).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { slot: 3, .. }));
    }
}
