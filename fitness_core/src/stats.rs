//! Distance, speed and calorie formulas per workout kind.
//!
//! Each kind keeps its own named constants; the functions are pure
//! arithmetic over decoded inputs, exhaustive over [`Workout`].

use crate::{Workout, WorkoutSummary};

const M_IN_KM: f64 = 1000.0;
const H_IN_MIN: f64 = 60.0;

mod running {
    /// Distance covered by one step, metres
    pub const STEP_LEN_M: f64 = 0.65;
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;
}

mod walking {
    /// Distance covered by one step, metres
    pub const STEP_LEN_M: f64 = 0.65;
    pub const WEIGHT_COEFF: f64 = 0.035;
    pub const SPEED_WEIGHT_COEFF: f64 = 0.029;
    /// km/h to m/s
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
}

mod swimming {
    /// Distance covered by one stroke, metres
    pub const STROKE_LEN_M: f64 = 1.38;
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Distance in km: action count times the per-kind step length.
pub fn distance_km(workout: &Workout) -> f64 {
    let step_len = match workout {
        Workout::Running(_) => running::STEP_LEN_M,
        Workout::SportsWalking { .. } => walking::STEP_LEN_M,
        Workout::Swimming { .. } => swimming::STROKE_LEN_M,
    };
    f64::from(workout.base().action) * step_len / M_IN_KM
}

/// Mean speed in km/h.
///
/// Running and walking divide the step distance by the duration; swimming
/// speed comes from pool geometry instead.
pub fn mean_speed_kmh(workout: &Workout) -> f64 {
    match workout {
        Workout::Swimming {
            base,
            pool_length_m,
            pool_laps,
        } => (pool_length_m * f64::from(*pool_laps)) / M_IN_KM / base.duration_h,
        _ => distance_km(workout) / workout.base().duration_h,
    }
}

/// Calories burned over the whole workout, kcal.
pub fn calories_kcal(workout: &Workout) -> f64 {
    let speed = mean_speed_kmh(workout);

    match workout {
        Workout::Running(base) => {
            (running::SPEED_MULTIPLIER * speed + running::SPEED_SHIFT)
                * (base.weight_kg / M_IN_KM * (base.duration_h * H_IN_MIN))
        }
        Workout::SportsWalking { base, height_cm } => {
            (walking::WEIGHT_COEFF * base.weight_kg
                + (speed * walking::KMH_IN_MSEC).powi(2) / (height_cm / walking::CM_IN_M)
                    * walking::SPEED_WEIGHT_COEFF
                    * base.weight_kg)
                * base.duration_h
                * H_IN_MIN
        }
        Workout::Swimming { base, .. } => {
            (speed + swimming::SPEED_SHIFT)
                * swimming::WEIGHT_MULTIPLIER
                * base.weight_kg
                * base.duration_h
        }
    }
}

/// Compute the full summary for one workout.
pub fn summarize(workout: &Workout) -> WorkoutSummary {
    WorkoutSummary {
        training_type: workout.label(),
        duration_h: workout.base().duration_h,
        distance_km: distance_km(workout),
        speed_kmh: mean_speed_kmh(workout),
        calories_kcal: calories_kcal(workout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_package;

    /// Match to three decimal places, the report precision
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.0005,
            "expected {} to be within 0.0005 of {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_running_distance_uses_step_length() {
        let workout = decode_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_close(distance_km(&workout), 15000.0 * 0.65 / 1000.0);
    }

    #[test]
    fn test_walking_distance_uses_step_length() {
        let workout = decode_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_close(distance_km(&workout), 5.850);
    }

    #[test]
    fn test_swimming_distance_uses_stroke_length() {
        let workout = decode_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_close(distance_km(&workout), 720.0 * 1.38 / 1000.0);
    }

    #[test]
    fn test_running_speed_is_distance_over_duration() {
        let workout = decode_package("RUN", &[15000.0, 2.0, 75.0]).unwrap();
        assert_close(mean_speed_kmh(&workout), 15000.0 * 0.65 / 1000.0 / 2.0);
    }

    #[test]
    fn test_swimming_speed_from_pool_geometry() {
        // 25m pool, 40 laps, 1 hour: exactly 1 km/h
        let workout = decode_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(mean_speed_kmh(&workout), 1.0);
    }

    #[test]
    fn test_running_calories() {
        let workout = decode_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

        let speed = 15000.0 * 0.65 / 1000.0 / 1.0;
        let expected = (18.0 * speed + 1.79) * 75.0 / 1000.0 * (1.0 * 60.0);

        assert_close(calories_kcal(&workout), expected);
        assert_close(calories_kcal(&workout), 797.805);
    }

    #[test]
    fn test_walking_calories() {
        let workout = decode_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

        let speed = 5.85;
        let expected =
            (0.035 * 75.0 + (speed * 0.278_f64).powi(2) / (180.0 / 100.0) * 0.029 * 75.0)
                * 1.0
                * 60.0;

        assert_close(calories_kcal(&workout), expected);
        assert_close(calories_kcal(&workout), 349.252);
    }

    #[test]
    fn test_swimming_calories() {
        let workout = decode_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

        // speed 1.0: (1.0 + 1.1) * 2 * 80 * 1
        assert_close(calories_kcal(&workout), 336.000);
    }

    #[test]
    fn test_summarize_packages_all_figures() {
        let workout = decode_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let summary = summarize(&workout);

        assert_eq!(summary.training_type, "SportsWalking");
        assert_eq!(summary.duration_h, 1.0);
        assert_close(summary.distance_km, 5.850);
        assert_close(summary.speed_kmh, 5.850);
        assert_close(summary.calories_kcal, 349.252);
    }
}
