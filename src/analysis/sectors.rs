//! Lap sector analysis.
//!
//! A course is split into four sectors by fixed distances from the start
//! line. Distance is cumulative over the whole session, so the distance at
//! the first sample of each lap is subtracted to get the distance into the
//! current lap. When that distance falls inside the detection window just
//! past a boundary, the lap clock at that sample marks the boundary crossing.
//!
//! Laps are scanned in a single pass; each lap boundary yields one immutable
//! [`LapSplits`] record.

use serde::{Deserialize, Serialize};

use super::require_same_length;
use crate::error::Result;

/// Fixed geometry of a course
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Course name
    pub name: String,
    /// Cumulative distances (m) at the end of sectors 1-4; the last is the lap length
    pub sector_boundaries: [f64; 4],
    /// Width (m) of the window past each boundary in which a sample counts as crossing it
    pub window: f64,
    /// Seconds the game adds when crossing the finish line
    pub finish_offset: f64,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self::la_selva()
    }
}

impl CourseConfig {
    /// La Selva circuit
    pub fn la_selva() -> Self {
        Self {
            name: "La Selva Circuit".to_string(),
            sector_boundaries: [1878.0, 3184.0, 4311.0, 5951.0],
            window: 1.0,
            finish_offset: 0.0125,
        }
    }

    /// Length of one lap (m)
    pub fn lap_length(&self) -> f64 {
        self.sector_boundaries[3]
    }

    /// Which of the three inner boundaries, if any, this lap distance crosses
    pub fn boundary_hit(&self, distance_in_lap: f64) -> Option<usize> {
        self.sector_boundaries[..3]
            .iter()
            .position(|&b| distance_in_lap > b && distance_in_lap < b + self.window)
    }
}

/// Sector splits of one lap
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LapSplits {
    /// Lap number as recorded
    pub lap: f64,
    /// Lap clock at the last sample of the lap
    pub lap_time: f64,
    /// The lap reached the finish line; false for a log that stops mid-lap
    pub finished: bool,
    /// Duration of each sector, `None` when a boundary was never sampled
    pub sectors: [Option<f64>; 4],
}

impl LapSplits {
    /// Whether every sector boundary was observed
    pub fn is_complete(&self) -> bool {
        self.sectors.iter().all(Option::is_some)
    }

    /// Sum of the known sector durations
    pub fn total(&self) -> f64 {
        self.sectors.iter().flatten().sum()
    }
}

/// Scan state carried from one sample to the next
#[derive(Clone, Copy, Debug)]
struct LapScan {
    lap_start_distance: f64,
    crossings: [Option<f64>; 3],
}

impl LapScan {
    fn start(distance: f64) -> Self {
        Self {
            lap_start_distance: distance,
            crossings: [None; 3],
        }
    }

    fn finish(&self, lap: f64, lap_time: f64, finished: bool, finish_offset: f64) -> LapSplits {
        let [c1, c2, c3] = self.crossings;
        let between = |from: Option<f64>, to: Option<f64>| from.zip(to).map(|(a, b)| b - a);

        LapSplits {
            lap,
            lap_time,
            finished,
            sectors: [
                c1,
                between(c1, c2),
                between(c2, c3),
                c3.map(|c| lap_time - c + finish_offset),
            ],
        }
    }
}

/// Sector splits for every lap in the log.
///
/// `distance`, `laps` and `lap_times` are parallel series: cumulative
/// distance (m), lap number and the in-lap clock (s). A lap ends at the last
/// sample before the lap number changes, or at the end of the log. The final
/// lap only counts as finished if it covered a full lap length.
pub fn lap_splits(
    distance: &[f64],
    laps: &[f64],
    lap_times: &[f64],
    course: &CourseConfig,
) -> Result<Vec<LapSplits>> {
    require_same_length(distance, laps)?;
    require_same_length(distance, lap_times)?;

    let n = distance.len();
    let mut completed = Vec::new();
    let mut scan = LapScan::start(distance.first().copied().unwrap_or_default());

    for i in 0..n {
        if i > 0 && laps[i] != laps[i - 1] {
            scan = LapScan::start(distance[i]);
        }

        let in_lap = distance[i] - scan.lap_start_distance;
        if let Some(boundary) = course.boundary_hit(in_lap) {
            scan.crossings[boundary] = Some(lap_times[i]);
        }

        let lap_changes = i + 1 < n && laps[i] != laps[i + 1];
        if lap_changes || i + 1 == n {
            let finished = lap_changes || in_lap >= course.lap_length();
            let splits = scan.finish(laps[i], lap_times[i], finished, course.finish_offset);
            if !finished {
                tracing::debug!("Log ends partway through lap {}", splits.lap);
            }
            if !splits.is_complete() {
                tracing::warn!(
                    "Lap {} is missing sector boundary samples; affected sectors are unknown",
                    splits.lap
                );
            }
            completed.push(splits);
        }
    }

    Ok(completed)
}

/// Sector splits of the best lap.
///
/// The best lap is the last finished lap whose final lap clock does not
/// exceed `best_lap`. `None` when no lap qualifies.
pub fn best_lap_splits(
    distance: &[f64],
    laps: &[f64],
    lap_times: &[f64],
    best_lap: f64,
    course: &CourseConfig,
) -> Result<Option<LapSplits>> {
    let splits = lap_splits(distance, laps, lap_times, course)?;
    Ok(splits
        .into_iter()
        .rev()
        .find(|s| s.finished && s.lap_time <= best_lap))
}
