//! Car identifiers recorded in a session.
//!
//! The simulator tags every sample with the ordinal (unique id) of the car
//! being driven. A session may switch cars, so the ordinals are reported in
//! the order they were driven.

use crate::columns::Field;
use crate::error::Result;
use crate::parsers::types::TelemetryLog;
use crate::series::SeriesExtractor;

/// Ordinal of the car in the first data row
pub fn car_ordinal(log: &TelemetryLog) -> Result<String> {
    let extractor = SeriesExtractor::new(log)?;
    Ok(extractor.first_cell(Field::CarOrdinal)?.to_string())
}

/// Ordinals of every car driven, consecutive repeats collapsed
pub fn car_ordinals(log: &TelemetryLog) -> Result<Vec<String>> {
    let extractor = SeriesExtractor::new(log)?;
    let mut ordinals: Vec<String> = extractor
        .cells(Field::CarOrdinal)?
        .into_iter()
        .map(str::to_string)
        .collect();
    ordinals.dedup();
    Ok(ordinals)
}
