//! Race statistics: best lap, track top speed and best lap sector times.

use serde::Serialize;

use super::format::{self, precision};
use super::sectors::{best_lap_splits, CourseConfig};
use super::{peak, Analyzer};
use crate::columns::Field;
use crate::error::{Result, StatsError};
use crate::series::{Series, SeriesExtractor};

/// Race statistics for one log
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RaceStats {
    /// Best lap (s)
    pub best_lap: f64,
    /// Top speed over the whole session (mph)
    pub top_speed: f64,
    /// Sector durations of the best lap, `None` when unknown
    pub sectors: [Option<f64>; 4],
}

impl RaceStats {
    /// Best lap, top speed and the four sector times as display strings
    pub fn formatted(&self) -> (String, String, Vec<String>) {
        (
            format::lap_time(self.best_lap),
            format::fixed(self.top_speed, precision::TOP_SPEED),
            self.sectors
                .iter()
                .map(|s| format::sector_time_or_unknown(*s))
                .collect(),
        )
    }

    /// Flat output row: best lap, top speed, sectors 1-4
    pub fn to_row(&self) -> Vec<String> {
        let (best, top, sectors) = self.formatted();
        let mut row = vec![best, top];
        row.extend(sectors);
        row
    }
}

/// Best lap as reported by the game, corrected for an unregistered final lap.
///
/// When the log ends past the finish line of the last lap, the lap just
/// completed may not have been registered yet; its clock plus the finish
/// offset counts as the best lap if it beats the reported one.
pub fn corrected_best_lap(
    reported: f64,
    last_distance: f64,
    last_lap: f64,
    last_lap_time: f64,
    course: &CourseConfig,
) -> f64 {
    let lap_length = course.lap_length();
    let finished = last_distance - lap_length * last_lap > lap_length;
    let candidate = last_lap_time + course.finish_offset;
    if finished && candidate < reported {
        candidate
    } else {
        reported
    }
}

/// Race statistics analysis mode
#[derive(Clone, Debug, Default)]
pub struct RaceStatsAnalyzer {
    pub course: CourseConfig,
}

impl RaceStatsAnalyzer {
    pub fn new(course: CourseConfig) -> Self {
        Self { course }
    }
}

impl Analyzer for RaceStatsAnalyzer {
    type Output = RaceStats;

    fn name(&self) -> &str {
        "Race Statistics"
    }

    fn required_fields(&self) -> &[Field] {
        &Field::RACE
    }

    fn compute(&self, extractor: &SeriesExtractor<'_>) -> Result<RaceStats> {
        let lap_times = extractor.series(Field::CurrentLap)?;
        let distance = extractor.series(Field::DistanceTraveled)?;
        let laps = extractor.series(Field::LapNumber)?;
        let speed = extractor.series(Field::Speed)?;
        let reported = extractor.series(Field::BestLap)?;

        let last = |series: &Series| series.last().ok_or(StatsError::EmptyInput);
        let best_lap = corrected_best_lap(
            last(&reported)?,
            last(&distance)?,
            last(&laps)?,
            last(&lap_times)?,
            &self.course,
        );

        let sectors = match best_lap_splits(
            distance.as_slice(),
            laps.as_slice(),
            lap_times.as_slice(),
            best_lap,
            &self.course,
        )? {
            Some(splits) => splits.sectors,
            None => {
                tracing::warn!("No completed lap matches the best lap time {:.3}s", best_lap);
                [None; 4]
            }
        };

        Ok(RaceStats {
            best_lap,
            top_speed: peak(speed.as_slice())?,
            sectors,
        })
    }
}
