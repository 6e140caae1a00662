use crate::types::summary::Summary;

pub fn render_message(summary: &Summary) -> String {
    format!(
        "Type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
        summary.training_type,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories
    )
}
