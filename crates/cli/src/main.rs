//! Power position report CLI.
//!
//! Generates one batch of simulated intraday positions for a trade date and
//! writes the hourly summary, data profiling and data quality files.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use power_core::{format_trade_date, Config};
use power_report::ReportDriver;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "powerpos",
    about = "Intraday power position report generator"
)]
struct Cli {
    /// Trade date (DD/MM/YYYY). Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory, overriding the config file.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output.directory = dir;
    }

    let now = Local::now().naive_local();
    let date = cli.date.unwrap_or_else(|| format_trade_date(now.date()));

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let driver = ReportDriver::new(config).context("invalid configuration")?;
    let run = driver
        .run(&date, now, &mut rng)
        .with_context(|| format!("report run for {date} failed"))?;

    println!(
        "{}: generated {} positions, wrote {}, skipped {} ({} files in {})",
        date,
        run.generated,
        run.written,
        run.skipped,
        run.files.len(),
        driver.config().output.directory.display()
    );

    Ok(())
}
