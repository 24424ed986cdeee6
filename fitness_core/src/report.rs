//! Rendering a workout summary into the fixed report line.

use crate::WorkoutSummary;

/// Format a summary using the fixed report template.
///
/// All four numbers carry three decimal places; wording, field order and
/// punctuation are fixed.
pub fn format_summary(summary: &WorkoutSummary) -> String {
    format!(
        "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
        summary.training_type,
        summary.duration_h,
        summary.distance_km,
        summary.speed_kmh,
        summary.calories_kcal,
    )
}
