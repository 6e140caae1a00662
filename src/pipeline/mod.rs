pub mod factory;
pub mod metrics;
pub mod render;
pub mod summary;

use crate::error::WorkoutError;
use crate::types::summary::Summary;
use crate::types::workout::Package;

pub fn summarize(workout_type: &str, reading: &[f64]) -> Result<Summary, WorkoutError> {
    let workout = factory::read_package(workout_type, reading)?;
    let summary = summary::build_summary(&workout);

    let non_finite = [
        ("distance", summary.distance_km),
        ("mean speed", summary.mean_speed_kmh),
        ("calories", summary.calories),
    ]
    .into_iter()
    .find(|(_, value)| !value.is_finite());

    if let Some((name, value)) = non_finite {
        return Err(WorkoutError::DegenerateInput(format!(
            "{} is out of range for this {} reading (got {})",
            name, workout_type, value
        )));
    }

    Ok(summary)
}

/// Summarizes every package in order. A failing package yields its error in
/// place and does not affect the others.
pub fn run_batch(packages: &[Package]) -> Vec<Result<Summary, WorkoutError>> {
    packages
        .iter()
        .enumerate()
        .map(|(idx, package)| {
            let result = summarize(&package.workout_type, &package.data);
            match &result {
                Ok(summary) => tracing::debug!(
                    "Package {} ({}): {:.3} km, {:.3} kcal",
                    idx,
                    package.workout_type,
                    summary.distance_km,
                    summary.calories
                ),
                Err(e) => tracing::warn!("Skipping package {} ({}): {}", idx, package.workout_type, e),
            }
            result
        })
        .collect()
}
