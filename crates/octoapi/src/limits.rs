//! Safe ranges for physical setpoints.
//!
//! Out-of-range values are clamped to the nearest bound before they are
//! sent, never rejected.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Print-head feed-rate factor, in percent.
pub const FEEDRATE_RANGE: RangeInclusive<u32> = 50..=200;

/// Extruder flow-rate factor, in percent.
pub const FLOWRATE_RANGE: RangeInclusive<u32> = 75..=125;

/// Tool and bed target temperature, in degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=220.0;

/// Clamp a percentage factor into `range`.
pub fn clamp_factor(factor: u32, range: RangeInclusive<u32>) -> u32 {
    factor.clamp(*range.start(), *range.end())
}

/// Clamp a target temperature into [`TEMPERATURE_RANGE`].
///
/// NaN maps to the lower bound (heater off).
pub fn clamp_temperature(target: f64) -> f64 {
    if target.is_nan() {
        return *TEMPERATURE_RANGE.start();
    }
    target.clamp(*TEMPERATURE_RANGE.start(), *TEMPERATURE_RANGE.end())
}

/// Reject NaN and infinite distances and offsets.
///
/// These have no JSON representation and would otherwise be sent as `null`.
pub fn finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidArgument(format!("{} must be finite, got {}", name, value)))
    }
}
