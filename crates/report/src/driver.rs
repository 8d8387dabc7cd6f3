//! Batch report driver.
//!
//! Generates the positions for one trade date, analyzes each of them and
//! writes the summary, profiling and quality files.

use crate::naming::ReportFiles;
use crate::writer::{write_profile, write_quality, write_summary};
use chrono::NaiveDateTime;
use power_core::{Config, Result};
use power_features::{PositionAnalyzer, PositionReport};
use power_ingestion::TradeGenerator;
use rand::Rng;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one report run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Positions generated.
    pub generated: usize,
    /// Positions whose files were written.
    pub written: usize,
    /// Positions skipped because of a malformed record.
    pub skipped: usize,
    /// Every file written, in write order.
    pub files: Vec<PathBuf>,
}

/// Report driver.
pub struct ReportDriver {
    config: Config,
    generator: TradeGenerator,
    analyzer: PositionAnalyzer,
}

impl ReportDriver {
    /// Create a new driver from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let generator = TradeGenerator::new(config.generation.clone());
        let analyzer = PositionAnalyzer::new(&config);
        Ok(Self {
            config,
            generator,
            analyzer,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one batch for `date`, naming files after `generated_at`.
    ///
    /// An invalid date fails before anything is written. A position with a
    /// malformed record is skipped and counted.
    pub fn run<R: Rng + ?Sized>(
        &self,
        date: &str,
        generated_at: NaiveDateTime,
        rng: &mut R,
    ) -> Result<RunSummary> {
        let positions = self.generator.generate(date, rng)?;

        let directory = &self.config.output.directory;
        fs::create_dir_all(directory)?;

        let mut run = RunSummary {
            generated: positions.len(),
            ..RunSummary::default()
        };

        for (i, position) in positions.iter().enumerate() {
            let report = match self.analyzer.analyze(position) {
                Ok(report) => report,
                Err(e) if e.is_record_level() => {
                    warn!(id = %position.id, error = %e, "Skipping position");
                    run.skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let files = ReportFiles::new(directory, &self.config.output.file_prefix, generated_at, i + 1);
            write_report(&report, &files)?;

            for path in files.paths() {
                info!(path = %path.display(), "Wrote report file");
                run.files.push(path.to_path_buf());
            }
            run.written += 1;
        }

        Ok(run)
    }
}

/// Write the three files of one position report.
pub fn write_report(report: &PositionReport, files: &ReportFiles) -> Result<()> {
    write_summary(create(&files.summary)?, &report.summary)?;
    write_profile(create(&files.profiling)?, &report.profile)?;
    write_quality(create(&files.quality)?, &report.quality)?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}
