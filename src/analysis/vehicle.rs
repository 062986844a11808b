//! Vehicle performance statistics.
//!
//! Peak power, torque and boost, top speed, and a set of acceleration and
//! braking times chosen by the car's performance class. A single interval
//! that cannot be measured is reported as a placeholder; any other failure
//! aborts the whole analysis.

use serde::Serialize;
use strum::{AsRefStr, Display};

use super::format::{self, precision, FAILED_PLACEHOLDER};
use super::interval::SpeedInterval;
use super::{peak, require_same_length, Analyzer};
use crate::columns::Field;
use crate::error::{Result, StatsError};
use crate::series::SeriesExtractor;

/// Performance class of a car
#[derive(AsRefStr, Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
pub enum VehicleClass {
    D,
    C,
    B,
    A,
    S1,
    S2,
    X,
    /// Class code not known to this tool
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl VehicleClass {
    /// Decode the class code recorded by the simulator
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => VehicleClass::D,
            1 => VehicleClass::C,
            2 => VehicleClass::B,
            3 => VehicleClass::A,
            4 => VehicleClass::S1,
            5 => VehicleClass::S2,
            6 => VehicleClass::X,
            _ => VehicleClass::Unknown,
        }
    }

    /// The two class-specific acceleration intervals.
    ///
    /// Unknown codes are treated like the fastest classes.
    pub fn class_intervals(&self) -> [SpeedInterval; 2] {
        match self {
            VehicleClass::D | VehicleClass::C => {
                [SpeedInterval::new(25.0, 75.0), SpeedInterval::new(50.0, 100.0)]
            }
            VehicleClass::B | VehicleClass::A => {
                [SpeedInterval::new(50.0, 100.0), SpeedInterval::new(60.0, 150.0)]
            }
            _ => [SpeedInterval::new(60.0, 150.0), SpeedInterval::new(100.0, 200.0)],
        }
    }

    /// Every interval reported for this class, in output order
    pub fn intervals(&self) -> [SpeedInterval; 6] {
        let [first, second] = self.class_intervals();
        [
            SpeedInterval::new(0.0, 60.0),
            SpeedInterval::new(0.0, 100.0),
            first,
            second,
            SpeedInterval::new(60.0, 0.0),
            SpeedInterval::new(100.0, 0.0),
        ]
    }
}

/// Drivetrain layout
#[derive(AsRefStr, Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
pub enum Drivetrain {
    #[strum(serialize = "FWD")]
    Fwd,
    #[strum(serialize = "RWD")]
    Rwd,
    #[strum(serialize = "AWD")]
    Awd,
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl Drivetrain {
    /// Decode the drivetrain code recorded by the simulator
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Drivetrain::Fwd,
            1 => Drivetrain::Rwd,
            2 => Drivetrain::Awd,
            _ => Drivetrain::Unknown,
        }
    }
}

/// Outcome of one interval measurement
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntervalTime {
    pub interval: SpeedInterval,
    /// Seconds, or `None` when the interval could not be measured
    pub seconds: Option<f64>,
}

/// Vehicle performance statistics for one log
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VehicleStats {
    /// Performance index as recorded
    pub performance_index: String,
    pub drivetrain: Drivetrain,
    pub class: VehicleClass,
    /// Peak power (hp)
    pub peak_power: f64,
    /// Peak torque (ft·lb)
    pub peak_torque: f64,
    /// Interval times in output order
    pub intervals: Vec<IntervalTime>,
    /// Top speed (mph)
    pub top_speed: f64,
    /// Peak boost as recorded
    pub peak_boost: f64,
}

impl VehicleStats {
    /// Flat output row using the default placeholder
    pub fn to_row(&self) -> Vec<String> {
        self.to_row_with(FAILED_PLACEHOLDER)
    }

    /// Flat output row: index, drivetrain, power, torque, six intervals,
    /// top speed, boost
    pub fn to_row_with(&self, placeholder: &str) -> Vec<String> {
        let mut row = vec![
            self.performance_index.clone(),
            self.drivetrain.to_string(),
            format::fixed(self.peak_power, precision::POWER),
            format::fixed(self.peak_torque, precision::TORQUE),
        ];
        row.extend(self.intervals.iter().map(|i| match i.seconds {
            Some(s) => format::fixed(s, precision::INTERVAL),
            None => placeholder.to_string(),
        }));
        row.push(format::fixed(self.top_speed, precision::TOP_SPEED));
        row.push(format::fixed(self.peak_boost, precision::BOOST));
        row
    }
}

/// Peak power, ignoring samples taken in first gear.
///
/// Bouncing off the rev limiter at launch reports more power than the car
/// has, so first gear samples are skipped unless every sample is in first
/// gear (single speed cars).
pub fn peak_power(power: &[f64], gears: &[f64]) -> Result<f64> {
    require_same_length(power, gears)?;

    let single_gear = gears.iter().all(|&g| g == 1.0);
    power
        .iter()
        .zip(gears)
        .filter(|&(_, &g)| single_gear || g != 1.0)
        .map(|(&p, _)| p)
        .reduce(f64::max)
        .ok_or(StatsError::EmptyInput)
}

/// Measure each interval, turning recoverable failures into `None`
pub fn measure_intervals(
    intervals: &[SpeedInterval],
    times: &[f64],
    speeds: &[f64],
) -> Result<Vec<IntervalTime>> {
    intervals
        .iter()
        .map(|interval| match interval.measure(times, speeds) {
            Ok(seconds) => Ok(IntervalTime {
                interval: *interval,
                seconds: Some(seconds),
            }),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Could not measure {} mph: {}", interval.label(), e);
                Ok(IntervalTime {
                    interval: *interval,
                    seconds: None,
                })
            }
            Err(e) => Err(e),
        })
        .collect()
}

/// Vehicle statistics analysis mode
#[derive(Clone, Copy, Debug, Default)]
pub struct VehicleStatsAnalyzer;

impl Analyzer for VehicleStatsAnalyzer {
    type Output = VehicleStats;

    fn name(&self) -> &str {
        "Vehicle Statistics"
    }

    fn required_fields(&self) -> &[Field] {
        &Field::VEHICLE
    }

    fn compute(&self, extractor: &SeriesExtractor<'_>) -> Result<VehicleStats> {
        let times = extractor.series(Field::TimestampMs)?;
        let power = extractor.series(Field::Power)?;
        let torque = extractor.series(Field::Torque)?;
        let speed = extractor.series(Field::Speed)?;
        let boost = extractor.series(Field::Boost)?;
        let gears = extractor.series(Field::Gear)?;

        let performance_index = extractor.first_cell(Field::CarPerformanceIndex)?.to_string();
        let drivetrain = Drivetrain::from_code(extractor.first_code(Field::DrivetrainType)?);
        let class = VehicleClass::from_code(extractor.first_code(Field::CarClass)?);

        let intervals = measure_intervals(&class.intervals(), times.as_slice(), speed.as_slice())?;

        Ok(VehicleStats {
            performance_index,
            drivetrain,
            class,
            peak_power: peak_power(power.as_slice(), gears.as_slice())?,
            peak_torque: peak(torque.as_slice())?,
            intervals,
            top_speed: peak(speed.as_slice())?,
            peak_boost: peak(boost.as_slice())?,
        })
    }
}
