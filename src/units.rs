//! Unit conversion utilities.
//!
//! The simulator reports values in SI units. Statistics are presented in
//! imperial units (mph, hp, ft·lb), so conversions are applied while series
//! are extracted from the log.

/// Meters per second to miles per hour
pub const MPS_TO_MPH: f64 = 2.237;

/// Watts to mechanical horsepower
pub const WATTS_TO_HP: f64 = 0.0013410220888;

/// Newton-meters to foot-pounds
pub const NM_TO_FTLB: f64 = 0.7375621493;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// Conversion applied to a raw cell value during extraction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Conversion {
    /// Value is used as recorded
    #[default]
    None,
    /// m/s → mph
    MetersPerSecondToMph,
    /// W → hp
    WattsToHorsepower,
    /// N·m → ft·lb
    NewtonMetersToFootPounds,
    /// ms → s
    MillisecondsToSeconds,
}

impl Conversion {
    /// Display symbol of the converted unit
    pub fn symbol(&self) -> &'static str {
        match self {
            Conversion::None => "",
            Conversion::MetersPerSecondToMph => "mph",
            Conversion::WattsToHorsepower => "hp",
            Conversion::NewtonMetersToFootPounds => "ft·lb",
            Conversion::MillisecondsToSeconds => "s",
        }
    }

    /// Convert a native value to the presentation unit
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::None => value,
            Conversion::MetersPerSecondToMph => value * MPS_TO_MPH,
            Conversion::WattsToHorsepower => value * WATTS_TO_HP,
            Conversion::NewtonMetersToFootPounds => value * NM_TO_FTLB,
            Conversion::MillisecondsToSeconds => value / MS_PER_SECOND,
        }
    }

    /// Convert a presentation value back to native units
    #[inline]
    pub fn invert(&self, value: f64) -> f64 {
        match self {
            Conversion::None => value,
            Conversion::MetersPerSecondToMph => value / MPS_TO_MPH,
            Conversion::WattsToHorsepower => value / WATTS_TO_HP,
            Conversion::NewtonMetersToFootPounds => value / NM_TO_FTLB,
            Conversion::MillisecondsToSeconds => value * MS_PER_SECOND,
        }
    }
}
