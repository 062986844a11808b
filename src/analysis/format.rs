//! Rendering of computed statistics as display strings.

/// Shown in place of an interval that could not be measured
pub const FAILED_PLACEHOLDER: &str = "Failed!";

/// Shown in place of a sector whose boundary was never sampled
pub const UNKNOWN_SECTOR: &str = "--:--:--.---";

/// Decimal places per statistic
pub mod precision {
    pub const POWER: usize = 0;
    pub const TORQUE: usize = 0;
    pub const BOOST: usize = 1;
    pub const TOP_SPEED: usize = 2;
    pub const INTERVAL: usize = 3;
}

/// Fixed precision number, e.g. `fixed(12.345, 1)` is "12.3"
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Split seconds into whole minutes, whole seconds and milliseconds
fn split_duration(seconds: f64) -> (u64, u64, u64) {
    let millis = (seconds.max(0.0) * 1000.0).round() as u64;
    (millis / 60_000, (millis % 60_000) / 1000, millis % 1000)
}

/// Lap time as `mm:ss.sss`
pub fn lap_time(seconds: f64) -> String {
    let (min, sec, ms) = split_duration(seconds);
    format!("{:02}:{:02}.{:03}", min, sec, ms)
}

/// Sector duration as `00:mm:ss.sss`
pub fn sector_time(seconds: f64) -> String {
    format!("00:{}", lap_time(seconds))
}

/// Sector duration, or the unknown placeholder
pub fn sector_time_or_unknown(seconds: Option<f64>) -> String {
    seconds
        .map(sector_time)
        .unwrap_or_else(|| UNKNOWN_SECTOR.to_string())
}
