//! forzastats - Performance statistics from racing simulator telemetry
//!
//! This library loads a recorded telemetry log and derives acceleration and
//! braking times, peak power and torque, top speed, best lap and lap sector
//! times from it.
//!
//! ## Module Structure
//!
//! - [`parsers`] - Telemetry log loaders (CSV)
//! - [`columns`] - Header column resolution
//! - [`series`] - Typed series extraction with unit conversion
//! - [`units`] - Unit conversion factors
//! - [`analysis`] - Interval, sector, vehicle and race analysis
//! - [`settings`] - Course and output settings persistence
//! - [`error`] - Error types

pub mod analysis;
pub mod columns;
pub mod error;
pub mod parsers;
pub mod series;
pub mod settings;
pub mod units;

pub use analysis::race::{RaceStats, RaceStatsAnalyzer};
pub use analysis::vehicle::{VehicleStats, VehicleStatsAnalyzer};
pub use analysis::Analyzer;
pub use error::{Result, StatsError};
