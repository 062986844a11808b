use crate::columns::{ColumnMap, Field};
use crate::error::{Result, StatsError};

/// Loaded telemetry log: a header row plus string cells aligned to it
#[derive(Clone, Debug, Default)]
pub struct TelemetryLog {
    /// Column names from the first row
    pub header: Vec<String>,
    /// Data rows in recording order
    pub rows: Vec<Vec<String>>,
}

impl TelemetryLog {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Number of data points (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve the header row into column positions
    pub fn columns(&self) -> ColumnMap {
        ColumnMap::resolve(&self.header)
    }

    /// Fail with `EmptyInput` when there are no data rows
    pub fn require_data(&self) -> Result<()> {
        if self.rows.is_empty() {
            Err(StatsError::EmptyInput)
        } else {
            Ok(())
        }
    }

    /// Raw cell of a data row by field
    pub fn cell(&self, columns: &ColumnMap, row: usize, field: Field) -> Result<&str> {
        let index = columns.index(field)?;
        let cells = self.rows.get(row).ok_or(StatsError::EmptyInput)?;
        cells
            .get(index)
            .map(|s| s.as_str())
            .ok_or_else(|| StatsError::malformed(row, field, ""))
    }
}

/// Trait for telemetry log loaders
pub trait Parseable {
    fn parse(&self, data: &str) -> Result<TelemetryLog>;
}
