//! Typed series extraction.
//!
//! Turns the string cells of one column into a numeric series, converting
//! units on the way. A cell that does not parse aborts the extraction with
//! [`StatsError::MalformedData`]; no partial series is ever returned.

use crate::columns::{ColumnMap, Field};
use crate::error::{Result, StatsError};
use crate::parsers::types::TelemetryLog;

/// Numeric values of one field, one per data row in recording order
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub field: Field,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(field: Field, values: Vec<f64>) -> Self {
        Self { field, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Extracts typed series from a loaded log
pub struct SeriesExtractor<'a> {
    log: &'a TelemetryLog,
    columns: ColumnMap,
}

impl<'a> SeriesExtractor<'a> {
    /// Resolve the log's header and prepare for extraction.
    ///
    /// Fails with `EmptyInput` when the log has no data rows.
    pub fn new(log: &'a TelemetryLog) -> Result<Self> {
        log.require_data()?;
        Ok(Self {
            log,
            columns: log.columns(),
        })
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Extract one field with its unit conversion applied
    pub fn series(&self, field: Field) -> Result<Series> {
        let index = self.columns.index(field)?;
        let conversion = field.conversion();

        let values = self
            .log
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| -> Result<f64> {
                let raw = cells
                    .get(index)
                    .ok_or_else(|| StatsError::malformed(row, field, ""))?;
                raw.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(|v| conversion.apply(v))
                    .ok_or_else(|| StatsError::malformed(row, field, raw.as_str()))
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Series::new(field, values))
    }

    /// Raw text of a field in the first data row
    pub fn first_cell(&self, field: Field) -> Result<&'a str> {
        self.log.cell(&self.columns, 0, field)
    }

    /// Raw text of a field in every data row
    pub fn cells(&self, field: Field) -> Result<Vec<&'a str>> {
        let index = self.columns.index(field)?;
        self.log
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .get(index)
                    .map(|s| s.as_str())
                    .ok_or_else(|| StatsError::malformed(row, field, ""))
            })
            .collect()
    }

    /// Integer code of a field in the first data row
    pub fn first_code(&self, field: Field) -> Result<i64> {
        let raw = self.first_cell(field)?;
        raw.parse::<i64>().map_err(|_| StatsError::malformed(0, field, raw))
    }
}
