//! Column resolution for header-driven telemetry logs.
//!
//! Maps the semantic fields the analysis needs to their position in the
//! header row. Column order in the log is irrelevant; a field that is not
//! present resolves to [`StatsError::MissingColumn`] rather than a default
//! position.

use serde::Serialize;
use std::collections::HashMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{Result, StatsError};
use crate::units::Conversion;

/// Semantic telemetry fields, named exactly as they appear in the header
#[derive(
    AsRefStr, Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
pub enum Field {
    Speed,
    Boost,
    CarPerformanceIndex,
    DrivetrainType,
    Power,
    Torque,
    #[strum(serialize = "TimestampMS")]
    TimestampMs,
    Gear,
    CarClass,
    CarOrdinal,
    BestLap,
    CurrentLap,
    DistanceTraveled,
    LapNumber,
}

impl Field {
    /// Conversion applied when this field is extracted as a series
    pub fn conversion(&self) -> Conversion {
        match self {
            Field::Speed => Conversion::MetersPerSecondToMph,
            Field::Power => Conversion::WattsToHorsepower,
            Field::Torque => Conversion::NewtonMetersToFootPounds,
            Field::TimestampMs => Conversion::MillisecondsToSeconds,
            _ => Conversion::None,
        }
    }

    /// Columns needed for vehicle performance statistics
    pub const VEHICLE: [Field; 9] = [
        Field::Speed,
        Field::Boost,
        Field::CarPerformanceIndex,
        Field::DrivetrainType,
        Field::Power,
        Field::Torque,
        Field::TimestampMs,
        Field::Gear,
        Field::CarClass,
    ];

    /// Columns needed for lap and sector statistics
    pub const RACE: [Field; 5] = [
        Field::BestLap,
        Field::CurrentLap,
        Field::DistanceTraveled,
        Field::LapNumber,
        Field::Speed,
    ];
}

/// Mapping from semantic field to column position
#[derive(Clone, Debug, Default)]
pub struct ColumnMap {
    indices: HashMap<Field, usize>,
}

impl ColumnMap {
    /// Build the map from a header row.
    ///
    /// Unrecognized names are ignored. When a name appears more than once the
    /// last occurrence wins.
    pub fn resolve<S: AsRef<str>>(header: &[S]) -> Self {
        let mut indices = HashMap::new();
        for (index, name) in header.iter().enumerate() {
            if let Ok(field) = name.as_ref().trim().parse::<Field>() {
                indices.insert(field, index);
            }
        }
        tracing::debug!("Resolved {} known columns", indices.len());
        Self { indices }
    }

    /// Column position of a field
    pub fn index(&self, field: Field) -> Result<usize> {
        self.indices
            .get(&field)
            .copied()
            .ok_or(StatsError::MissingColumn(field))
    }

    /// Check if a field is present
    pub fn contains(&self, field: Field) -> bool {
        self.indices.contains_key(&field)
    }

    /// Fail with the first missing field, if any
    pub fn require(&self, fields: &[Field]) -> Result<()> {
        match fields.iter().find(|f| !self.contains(**f)) {
            Some(missing) => Err(StatsError::MissingColumn(*missing)),
            None => Ok(()),
        }
    }

    /// Number of recognized columns
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
