//! Core domain types for the workout statistics system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw sensor packages as they arrive from a source
//! - Decoded workouts (running, sports walking, swimming)
//! - The computed summary handed to the report formatter

use serde::{Deserialize, Serialize};

// ============================================================================
// Wire Types
// ============================================================================

/// A raw package from a fitness sensor: a workout code plus positional
/// readings.
///
/// Readings are ordered the way the sensors emit them: `action`, `duration`
/// (hours), `weight` (kg), then the kind-specific tail (`height` in cm for
/// walking; `length_pool` in metres and `count_pool` for swimming).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub workout_type: String,
    pub values: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            values,
        }
    }
}

// ============================================================================
// Workout Types
// ============================================================================

/// Readings shared by every workout kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseInputs {
    /// Steps for running/walking, strokes for swimming
    pub action: u32,
    /// Workout duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

/// A decoded workout, one variant per supported activity kind.
///
/// Each variant owns its full input set; the formulas in [`crate::stats`]
/// are exhaustive over this enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(BaseInputs),
    SportsWalking {
        base: BaseInputs,
        height_cm: f64,
    },
    Swimming {
        base: BaseInputs,
        pool_length_m: f64,
        pool_laps: u32,
    },
}

impl Workout {
    /// Readings common to all kinds
    pub fn base(&self) -> &BaseInputs {
        match self {
            Workout::Running(base) => base,
            Workout::SportsWalking { base, .. } => base,
            Workout::Swimming { base, .. } => base,
        }
    }

    /// Training type label used in the formatted report
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running(_) => "Running",
            Workout::SportsWalking { .. } => "SportsWalking",
            Workout::Swimming { .. } => "Swimming",
        }
    }
}

// ============================================================================
// Summary Type
// ============================================================================

/// Computed statistics for one workout.
///
/// Built once by [`crate::stats::summarize`] and never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct WorkoutSummary {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}
