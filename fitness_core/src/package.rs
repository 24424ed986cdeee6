//! Decoding raw sensor packages into typed workouts.
//!
//! A package carries a short workout code and a flat positional list of
//! readings. Decoding selects the variant for the code, checks the reading
//! count, and rejects values the formulas cannot work with.

use crate::{BaseInputs, Error, Result, SensorPackage, Workout};

/// Code emitted by running sensors
pub const CODE_RUNNING: &str = "RUN";
/// Code emitted by sports-walking sensors
pub const CODE_WALKING: &str = "WLK";
/// Code emitted by swimming sensors
pub const CODE_SWIMMING: &str = "SWM";

const RUNNING_READINGS: usize = 3;
const WALKING_READINGS: usize = 4;
const SWIMMING_READINGS: usize = 5;

/// Decode a raw `(code, values)` package into a typed workout.
///
/// Values are positional: `action`, `duration` (hours), `weight` (kg), then
/// `height` (cm) for walking or `length_pool` (m) and `count_pool` for
/// swimming. An unknown code fails before any readings are looked at.
pub fn decode_package(code: &str, values: &[f64]) -> Result<Workout> {
    match code {
        CODE_RUNNING => {
            check_readings(code, values, RUNNING_READINGS)?;
            Ok(Workout::Running(decode_base(code, values)?))
        }
        CODE_WALKING => {
            check_readings(code, values, WALKING_READINGS)?;
            Ok(Workout::SportsWalking {
                base: decode_base(code, values)?,
                height_cm: values[3],
            })
        }
        CODE_SWIMMING => {
            check_readings(code, values, SWIMMING_READINGS)?;
            Ok(Workout::Swimming {
                base: decode_base(code, values)?,
                pool_length_m: values[3],
                pool_laps: decode_count(code, "count_pool", values[4])?,
            })
        }
        other => Err(Error::UnknownWorkout(other.to_string())),
    }
}

fn check_readings(code: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(Error::Package(format!(
            "{} package carries {} readings, expected {}",
            code,
            values.len(),
            expected
        )));
    }
    Ok(())
}

fn decode_base(code: &str, values: &[f64]) -> Result<BaseInputs> {
    Ok(BaseInputs {
        action: decode_count(code, "action", values[0])?,
        duration_h: decode_duration(code, values[1])?,
        weight_kg: values[2],
    })
}

/// Count-typed readings (steps, strokes, laps) must be whole and nonnegative.
fn decode_count(code: &str, field: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::Package(format!(
            "{} package has invalid {}: {}",
            code, field, value
        )));
    }
    Ok(value as u32)
}

/// Speed divides by duration, so zero and negative durations never make it
/// past decoding.
fn decode_duration(code: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::Package(format!(
            "{} package has non-positive duration: {}",
            code, value
        )));
    }
    Ok(value)
}

impl SensorPackage {
    /// Decode this package into a typed workout.
    pub fn decode(&self) -> Result<Workout> {
        decode_package(&self.workout_type, &self.values)
    }
}
