use crate::pipeline::metrics::Metrics;
use crate::types::summary::Summary;
use crate::types::workout::Workout;

pub fn build_summary(workout: &Workout) -> Summary {
    let kind = workout.kind();
    let distance_km = workout.distance_km();
    let mean_speed_kmh = workout.mean_speed_kmh();
    let calories = workout.calories();

    Summary {
        kind,
        training_type: kind.label().to_string(),
        duration_hours: workout.duration_hours(),
        distance_km,
        mean_speed_kmh,
        calories,
    }
}
