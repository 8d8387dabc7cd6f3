//! CSV rendering of position reports.
//!
//! Every table is written with a header line. Absent statistics are written
//! as empty cells.

use power_core::{CheckCounts, HourlySummary, QualityCheck, QualityReport, Result, VolumeProfile};
use std::io::Write;

/// Write the hourly summary: `Local Time,Volume,Missing Volumes`.
pub fn write_summary<W: Write>(out: W, summary: &[HourlySummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["Local Time", "Volume", "Missing Volumes"])?;
    for row in summary {
        wtr.write_record([
            row.local_time.clone(),
            row.volume.to_string(),
            row.missing_volumes.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the volume profile as a statistic-per-row table with a `Volume` column.
pub fn write_profile<W: Write>(out: W, profile: &VolumeProfile) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["", "Volume"])?;
    for (name, value) in profile.rows() {
        let cell = value.map(|v| v.to_string()).unwrap_or_default();
        wtr.write_record([name, cell.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the quality report: one column per check, rows `Valid`, `Invalid`, `Total`.
pub fn write_quality<W: Write>(out: W, quality: &QualityReport) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec![""];
    header.extend(QualityCheck::ALL.iter().map(|c| c.name()));
    wtr.write_record(&header)?;

    let rows: [(&str, fn(&CheckCounts) -> usize); 3] = [
        ("Valid", |c| c.valid),
        ("Invalid", |c| c.invalid),
        ("Total", |c| c.total),
    ];
    for (label, pick) in rows {
        let mut record = vec![label.to_string()];
        record.extend(quality.iter().map(|(_, counts)| pick(&counts).to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
