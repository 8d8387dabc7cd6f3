//! Hourly business-day aggregation.
//!
//! Buckets the 5-minute slots of a position into business hours: each slot's
//! local hour is forward-filled when missing, shifted onto the business clock
//! and summed per `HH:00` label in order of first appearance.

use power_core::{
    business_hour, hour_label, BusinessDayConfig, Error, HourlySummary, LeadingGapPolicy, Result,
    SlotRecord, SlotTime,
};

/// Aggregator from slot records to business-hour summaries.
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: BusinessDayConfig,
}

impl Aggregator {
    /// Create a new aggregator.
    pub fn new(config: &BusinessDayConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Sum the volumes of `records` per business hour.
    ///
    /// Missing volumes are left out of the sum and counted per bucket. An
    /// out-of-range boundary hour fails with a configuration error.
    pub fn summarise(&self, records: &[SlotRecord]) -> Result<Vec<HourlySummary>> {
        self.config.validate()?;

        let mut buckets: Vec<HourlySummary> = Vec::with_capacity(24);
        // Bucket position per business hour.
        let mut index: [Option<usize>; 24] = [None; 24];
        let mut last_hour: Option<u32> = None;

        for (slot, record) in records.iter().enumerate() {
            let hour = match record.time.as_deref() {
                Some(label) => {
                    let hour = SlotTime::parse(label, slot)?.hour;
                    last_hour = Some(hour);
                    hour
                }
                None => match (last_hour, self.config.leading_gap) {
                    (Some(hour), _) => hour,
                    (None, LeadingGapPolicy::StartOfDay) => 0,
                    (None, LeadingGapPolicy::Reject) => {
                        return Err(Error::malformed(
                            slot,
                            "missing time label with no earlier hour to fill from",
                        ));
                    }
                },
            };

            let business = business_hour(hour, self.config.boundary_hour) as usize;
            let bucket = match index[business] {
                Some(i) => &mut buckets[i],
                None => {
                    index[business] = Some(buckets.len());
                    buckets.push(HourlySummary {
                        local_time: hour_label(business as u32),
                        volume: 0,
                        missing_volumes: 0,
                    });
                    let last = buckets.len() - 1;
                    &mut buckets[last]
                }
            };

            match record.volume {
                Some(volume) => bucket.volume += u64::from(volume),
                None => bucket.missing_volumes += 1,
            }
        }

        Ok(buckets)
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(&BusinessDayConfig::default())
    }
}

/// Summarise records with the default business-day settings.
pub fn summarise(records: &[SlotRecord]) -> Result<Vec<HourlySummary>> {
    Aggregator::default().summarise(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use power_core::{slot_labels, Volume};

    fn make_record(time: Option<&str>, volume: Option<Volume>) -> SlotRecord {
        SlotRecord {
            date: "01/03/2022".to_string(),
            time: time.map(str::to_string),
            volume,
        }
    }

    /// Full day grid with volumes `(k * 7) % 288`, a permutation of 0..288.
    fn full_day() -> Vec<SlotRecord> {
        slot_labels(5)
            .into_iter()
            .enumerate()
            .map(|(k, label)| SlotRecord {
                date: "01/03/2022".to_string(),
                time: Some(label),
                volume: Some(((k * 7) % 288) as Volume),
            })
            .collect()
    }

    #[test]
    fn test_full_day_has_24_buckets() {
        let records = full_day();
        let summary = summarise(&records).unwrap();

        assert_eq!(summary.len(), 24);
        let total: u64 = summary.iter().map(|s| s.volume).sum();
        assert_eq!(total, 41328);
        assert!(summary.iter().all(|s| s.missing_volumes == 0));

        let expected: Vec<String> = (0..24).map(hour_label).collect();
        let mut labels: Vec<String> = summary.iter().map(|s| s.local_time.clone()).collect();
        labels.sort();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_first_hour_lands_in_23() {
        let records = full_day();
        let summary = summarise(&records).unwrap();

        let first_hour: u64 = records[..12].iter().filter_map(|r| r.volume).map(u64::from).sum();
        assert_eq!(summary[0].local_time, "23:00");
        assert_eq!(summary[0].volume, first_hour);
        assert_eq!(summary[1].local_time, "00:00");
        assert_eq!(summary[23].local_time, "22:00");
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        let records = vec![
            make_record(Some("05:00"), Some(1)),
            make_record(Some("00:10"), Some(2)),
            make_record(Some("05:30"), Some(3)),
        ];
        let summary = summarise(&records).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].local_time, "04:00");
        assert_eq!(summary[0].volume, 4);
        assert_eq!(summary[1].local_time, "23:00");
        assert_eq!(summary[1].volume, 2);
    }

    #[test]
    fn test_missing_hour_forward_fills() {
        let records = vec![
            make_record(Some("14:55"), Some(10)),
            make_record(None, Some(5)),
            make_record(Some("15:05"), Some(1)),
        ];
        let summary = summarise(&records).unwrap();

        assert_eq!(summary[0].local_time, "13:00");
        assert_eq!(summary[0].volume, 15);
        assert_eq!(summary[1].local_time, "14:00");
        assert_eq!(summary[1].volume, 1);
    }

    #[test]
    fn test_missing_volume_excluded_and_counted() {
        let records = vec![
            make_record(Some("02:00"), Some(10)),
            make_record(Some("02:05"), None),
            make_record(Some("02:10"), None),
        ];
        let summary = summarise(&records).unwrap();

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].volume, 10);
        assert_eq!(summary[0].missing_volumes, 2);
    }

    #[test]
    fn test_leading_gap_start_of_day() {
        let records = vec![make_record(None, Some(4)), make_record(Some("00:05"), Some(6))];
        let summary = summarise(&records).unwrap();

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].local_time, "23:00");
        assert_eq!(summary[0].volume, 10);
    }

    #[test]
    fn test_leading_gap_reject() {
        let aggregator = Aggregator::new(&BusinessDayConfig {
            leading_gap: LeadingGapPolicy::Reject,
            ..BusinessDayConfig::default()
        });
        let records = vec![make_record(None, Some(4)), make_record(Some("00:05"), Some(6))];
        let err = aggregator.summarise(&records).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { slot: 0, .. }));
    }

    #[test]
    fn test_malformed_label() {
        let records = vec![make_record(Some("00:00"), Some(1)), make_record(Some("0005"), Some(1))];
        let err = summarise(&records).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { slot: 1, .. }));
    }

    #[test]
    fn test_summarise_is_repeatable() {
        let records = full_day();
        assert_eq!(summarise(&records).unwrap(), summarise(&records).unwrap());
    }

    #[test]
    fn test_midnight_boundary() {
        let aggregator = Aggregator::new(&BusinessDayConfig {
            boundary_hour: 0,
            ..BusinessDayConfig::default()
        });
        let records = vec![make_record(Some("00:00"), Some(3))];
        let summary = aggregator.summarise(&records).unwrap();
        assert_eq!(summary[0].local_time, "00:00");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let aggregator = Aggregator::new(&BusinessDayConfig {
            boundary_hour: u32::MAX,
            ..BusinessDayConfig::default()
        });
        let records = vec![make_record(Some("23:00"), Some(3))];
        let err = aggregator.summarise(&records).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_records() {
        assert!(summarise(&[]).unwrap().is_empty());
    }
}
