//! Speed threshold crossing analysis.
//!
//! Measures how long the car took to go from one speed to another, either
//! accelerating (0-60 mph) or braking (60-0 mph). The log is expected to be a
//! single test run: one acceleration from rest followed by one stop.

use serde::Serialize;

use super::require_same_length;
use crate::error::{Result, StatsError};

/// Margin added to thresholds to absorb sampling noise around exact speeds
pub const CROSSING_MARGIN: f64 = 0.1;

/// A speed interval such as 0-60 or 100-0 (mph)
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpeedInterval {
    pub start: f64,
    pub end: f64,
}

impl SpeedInterval {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Braking interval (start speed above end speed)
    pub fn is_deceleration(&self) -> bool {
        self.start > self.end
    }

    /// Short label, e.g. "0-60"
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    /// Time taken to cover this interval
    pub fn measure(&self, times: &[f64], speeds: &[f64]) -> Result<f64> {
        duration_between(self.start, self.end, times, speeds)
    }
}

/// Seconds taken to go from `start_speed` to `end_speed`.
///
/// `times` and `speeds` are parallel series in recording order. When
/// `start_speed > end_speed` the final crossing of each threshold is used
/// (braking at the end of the run); otherwise the first crossing is used and
/// each crossing time is the last sample still below the threshold.
pub fn duration_between(
    start_speed: f64,
    end_speed: f64,
    times: &[f64],
    speeds: &[f64],
) -> Result<f64> {
    require_same_length(times, speeds)?;

    let (min, max) = speeds
        .iter()
        .fold(None, |acc: Option<(f64, f64)>, &s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
        .ok_or(StatsError::EmptyInput)?;

    let out_of_range = || StatsError::OutOfRange {
        start: start_speed,
        end: end_speed,
        min,
        max,
    };

    // Never idled near zero, so low thresholds are unreachable
    let never_idled = min > CROSSING_MARGIN;
    if start_speed > max + CROSSING_MARGIN
        || end_speed > max + CROSSING_MARGIN
        || (never_idled && (start_speed < min || end_speed < min))
    {
        return Err(out_of_range());
    }

    let (start_time, end_time) = if start_speed > end_speed {
        deceleration_crossings(start_speed, end_speed, times, speeds)
    } else {
        (
            acceleration_crossing(start_speed, times, speeds),
            acceleration_crossing(end_speed, times, speeds),
        )
    };

    let (start_time, end_time) = match (start_time, end_time) {
        (Some(s), Some(e)) => (s, e),
        _ => return Err(out_of_range()),
    };

    if start_time > end_time {
        return Err(StatsError::NegativeDuration {
            start: start_time,
            end: end_time,
        });
    }

    Ok(end_time - start_time)
}

/// Time of the last sample before speed first reaches `threshold + margin`.
///
/// If the very first sample is already past the threshold, the crossing is
/// taken to be the start of the recording. `None` when the threshold is never
/// reached.
fn acceleration_crossing(threshold: f64, times: &[f64], speeds: &[f64]) -> Option<f64> {
    let limit = threshold + CROSSING_MARGIN;
    let first_reached = speeds.iter().position(|&s| s >= limit)?;
    let before = first_reached.saturating_sub(1);
    times.get(before).copied()
}

/// Times of the last samples still above `start + margin` and `end + margin`.
///
/// Samples above the start threshold are attributed to the start only, so the
/// end crossing is always taken from the slower part of the stop.
fn deceleration_crossings(
    start_speed: f64,
    end_speed: f64,
    times: &[f64],
    speeds: &[f64],
) -> (Option<f64>, Option<f64>) {
    times
        .iter()
        .zip(speeds)
        .fold((None, None), |(start, end), (&t, &s)| {
            if s > start_speed + CROSSING_MARGIN {
                (Some(t), end)
            } else if s > end_speed + CROSSING_MARGIN {
                (start, Some(t))
            } else {
                (start, end)
            }
        })
}
