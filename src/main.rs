//! forzastats - Performance statistics from racing simulator telemetry
//!
//! Reads a telemetry CSV recorded from the simulator's data-out stream and
//! prints vehicle statistics, race statistics or the car ordinals it contains.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use tracing_subscriber::EnvFilter;

use forzastats::analysis::ordinal::{car_ordinal, car_ordinals};
use forzastats::parsers::CsvLog;
use forzastats::settings::Settings;
use forzastats::{Analyzer, RaceStatsAnalyzer, VehicleStatsAnalyzer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Telemetry performance statistics", long_about = None)]
struct Cli {
    /// Telemetry CSV log to analyze
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Best lap, track top speed and sector times instead of vehicle statistics
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "ordinals")]
    race: bool,

    /// List the car ordinals recorded in the log
    #[arg(short, long, action = ArgAction::SetTrue)]
    ordinals: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Unable to read settings file {}", path.display()))?,
        None => Settings::load(),
    };

    let log = CsvLog::default()
        .load_file(&cli.input)
        .with_context(|| format!("Cannot read telemetry log {}", cli.input.display()))?;

    if cli.ordinals {
        let current = car_ordinal(&log).context("Unable to read car ordinal")?;
        let all = car_ordinals(&log).context("Unable to read car ordinals")?;
        if cli.json {
            println!(
                "{}",
                serde_json::json!({ "current": current, "ordinals": all })
            );
        } else {
            println!("Current car: {}", current);
            for ordinal in all {
                println!("{}", ordinal);
            }
        }
        return Ok(());
    }

    if cli.race {
        let analyzer = RaceStatsAnalyzer::new(settings.course.clone());
        let stats = analyzer
            .analyze(&log)
            .context("Race statistics could not be computed")?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            stats.to_row().iter().for_each(|value| println!("{}", value));
        }
    } else {
        let stats = VehicleStatsAnalyzer
            .analyze(&log)
            .context("Vehicle statistics could not be computed")?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            stats
                .to_row_with(&settings.failed_placeholder)
                .iter()
                .for_each(|value| println!("{}", value));
        }
    }

    Ok(())
}
