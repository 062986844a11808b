//! Telemetry analysis algorithms.
//!
//! Each analysis mode implements the [`Analyzer`] trait: it declares the
//! columns it needs, extracts its series from a loaded log and produces a
//! typed result that can be rendered as the flat list of display strings.
//!
//! - [`interval`] - time between two speed thresholds (0-60, 60-0, ...)
//! - [`sectors`] - per-lap sector splits on a fixed course
//! - [`vehicle`] - vehicle performance statistics
//! - [`race`] - best lap, track top speed and sector times
//! - [`ordinal`] - car identifiers recorded in a session
//! - [`format`] - display formatting of durations and magnitudes

pub mod format;
pub mod interval;
pub mod ordinal;
pub mod race;
pub mod sectors;
pub mod vehicle;

use std::time::Instant;

use crate::columns::Field;
use crate::error::{Result, StatsError};
use crate::parsers::types::TelemetryLog;
use crate::series::SeriesExtractor;

/// Core trait for analysis modes
pub trait Analyzer {
    /// Result of a successful analysis
    type Output;

    /// Human-readable mode name
    fn name(&self) -> &str;

    /// Columns that must be present in the header
    fn required_fields(&self) -> &[Field];

    /// Compute the result from already validated series
    fn compute(&self, extractor: &SeriesExtractor<'_>) -> Result<Self::Output>;

    /// Validate the log and run the analysis
    fn analyze(&self, log: &TelemetryLog) -> Result<Self::Output> {
        let extractor = SeriesExtractor::new(log)?;
        extractor.columns().require(self.required_fields())?;
        tracing::info!("Successfully processed {} data points!", extractor.len());

        let (result, elapsed_ms) = timed_analyze(|| self.compute(&extractor));
        tracing::debug!("{} finished in {} ms", self.name(), elapsed_ms);
        result
    }
}

/// Helper function to measure analysis execution time
pub fn timed_analyze<F, T>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis() as u64;
    (result, elapsed)
}

/// Helper to check that two parallel series line up
pub fn require_same_length(left: &[f64], right: &[f64]) -> Result<()> {
    if left.len() != right.len() {
        Err(StatsError::length_mismatch(left.len(), right.len()))
    } else {
        Ok(())
    }
}

/// Largest value of a series, `EmptyInput` if there is none
pub fn peak(values: &[f64]) -> Result<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(StatsError::EmptyInput)
}
