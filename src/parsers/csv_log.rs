//! Comma separated telemetry log loader
//!
//! The simulator's data-out recorder writes one header row naming every
//! telemetry field, followed by one row per sample. Only the header is used
//! to locate columns; no other CSV dialect detection is attempted.

use std::path::Path;

use super::types::{Parseable, TelemetryLog};
use crate::error::{Result, StatsError};

/// CSV telemetry log loader
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvLog;

impl CsvLog {
    /// Read and parse a log file from disk
    pub fn load_file(&self, path: &Path) -> Result<TelemetryLog> {
        let contents = std::fs::read_to_string(path)?;
        let log = self.parse(&contents)?;
        tracing::info!("Loaded {} rows from {:?}", log.len(), path);
        Ok(log)
    }
}

impl Parseable for CsvLog {
    fn parse(&self, data: &str) -> Result<TelemetryLog> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let mut records = reader.records();

        let header: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Err(StatsError::EmptyInput),
        };

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            // Blank trailing lines come through as a single empty field
            if record.len() == 1 && record.get(0).is_some_and(str::is_empty) {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(TelemetryLog::new(header, rows))
    }
}
