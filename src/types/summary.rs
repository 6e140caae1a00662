use serde::{Deserialize, Serialize};

use crate::types::workout::WorkoutKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub kind: WorkoutKind,
    pub training_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}
