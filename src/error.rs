//! Error types for telemetry analysis.

use thiserror::Error;

use crate::columns::Field;

/// Errors that can occur while loading or analyzing a telemetry log.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The log has a header but no data rows (or no header at all).
    #[error("telemetry log contains no data rows")]
    EmptyInput,

    /// A required column is not present in the header row.
    #[error("missing required column: {0}")]
    MissingColumn(Field),

    /// A cell could not be parsed as the expected numeric type.
    #[error("malformed value {value:?} in column {column} at data row {row}")]
    MalformedData {
        /// Zero-based data row index (header excluded).
        row: usize,
        /// Column the cell was read for.
        column: Field,
        /// The raw cell contents.
        value: String,
    },

    /// Two parallel series have different lengths.
    #[error("series lengths do not match: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// A requested threshold speed was never observed in the data.
    #[error("speed range {start}-{end} is outside of recorded data [{min:.2}, {max:.2}]")]
    OutOfRange {
        /// Requested start speed.
        start: f64,
        /// Requested end speed.
        end: f64,
        /// Minimum recorded speed.
        min: f64,
        /// Maximum recorded speed.
        max: f64,
    },

    /// The computed end time precedes the start time.
    #[error("calculated negative duration: end time {end} precedes start time {start}")]
    NegativeDuration {
        /// Time of the start crossing.
        start: f64,
        /// Time of the end crossing.
        end: f64,
    },

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Settings file could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(String),
}

impl StatsError {
    /// Creates a malformed data error.
    #[must_use]
    pub fn malformed(row: usize, column: Field, value: impl Into<String>) -> Self {
        Self::MalformedData {
            row,
            column,
            value: value.into(),
        }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Whether the aggregator may replace this error with a placeholder.
    ///
    /// Only per-interval failures are recoverable; everything else aborts the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NegativeDuration { .. })
    }
}

/// Result type alias for telemetry analysis.
pub type Result<T> = std::result::Result<T, StatsError>;
