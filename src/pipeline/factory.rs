use crate::error::WorkoutError;
use crate::types::workout::{Running, Swimming, Walking, Workout, WorkoutKind};

/// Builds a workout from a device tag and its raw reading.
///
/// The reading must carry exactly `WorkoutKind::arity` fields. Every field must
/// be finite and non-negative, and the counts must be whole numbers. The
/// divisors (duration, height, pool length) must be strictly positive.
pub fn read_package(workout_type: &str, reading: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| WorkoutError::InvalidWorkoutType(workout_type.to_string()))?;

    if reading.len() != kind.arity() {
        return Err(WorkoutError::MalformedReading {
            kind,
            expected: kind.arity(),
            actual: reading.len(),
        });
    }

    if let Some(pos) = reading.iter().position(|v| !v.is_finite() || *v < 0.0) {
        return Err(WorkoutError::DegenerateInput(format!(
            "field {} of {} reading must be a finite, non-negative number (got {})",
            pos, kind, reading[pos]
        )));
    }

    let duration_hours = positive(reading[1], "duration")?;
    let weight_kg = reading[2];

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running {
            action_count: whole(reading[0], "step count")?,
            duration_hours,
            weight_kg,
        }),
        WorkoutKind::Walking => Workout::Walking(Walking {
            action_count: whole(reading[0], "step count")?,
            duration_hours,
            weight_kg,
            height_cm: positive(reading[3], "height")?,
        }),
        WorkoutKind::Swimming => Workout::Swimming(Swimming {
            pool_count: whole(reading[0], "pool count")?,
            duration_hours,
            weight_kg,
            pool_length_m: positive(reading[3], "pool length")?,
        }),
    };

    Ok(workout)
}

fn positive(value: f64, name: &str) -> Result<f64, WorkoutError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::DegenerateInput(format!(
            "{} must be greater than zero",
            name
        )))
    }
}

fn whole(value: f64, name: &str) -> Result<u64, WorkoutError> {
    if value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(WorkoutError::DegenerateInput(format!(
            "{} must be a whole number (got {})",
            name, value
        )));
    }
    Ok(value as u64)
}
