use crate::types::workout::{Running, Swimming, Walking, Workout};

const STEP_LENGTH_KM: f64 = 0.00065;
const M_IN_KM: f64 = 1000.0;
const MIN_IN_HOUR: f64 = 60.0;
const CM_IN_M: f64 = 100.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_COEFFICIENT: f64 = 0.035;
const WALK_SPEED_HEIGHT_COEFFICIENT: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Derived figures every workout can report.
///
/// Implementations are pure: calling a method twice on the same workout
/// yields the same value. `mean_speed_kmh` builds on `distance_km` and
/// `calories` builds on `mean_speed_kmh`.
pub trait Metrics {
    fn distance_km(&self) -> f64;
    fn mean_speed_kmh(&self) -> f64;
    fn calories(&self) -> f64;
}

/// Rounds half-to-even at two decimal places.
///
/// The decision is taken on the exact binary value, not on `value * 100.0`
/// (which is itself rounded and can turn a near-tie into an exact one).
pub fn round2(value: f64) -> f64 {
    const EXACT_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

    let scaled = value * 100.0;
    if !scaled.is_finite() || scaled.abs() >= EXACT_LIMIT {
        return value;
    }

    let lower = scaled.floor();
    // Sign of `value * 200 - (2 * lower + 1)`, computed with a single rounding.
    let offset = value.mul_add(200.0, -(2.0 * lower + 1.0));
    let rounded = if offset > 0.0 {
        lower + 1.0
    } else if offset < 0.0 {
        lower
    } else if lower % 2.0 == 0.0 {
        lower
    } else {
        lower + 1.0
    };

    rounded / 100.0
}

impl Metrics for Running {
    fn distance_km(&self) -> f64 {
        self.action_count as f64 * STEP_LENGTH_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        round2(self.distance_km() / self.duration_hours)
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        round2(
            (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * self.weight_kg / M_IN_KM
                * self.duration_hours
                * MIN_IN_HOUR,
        )
    }
}

impl Metrics for Walking {
    fn distance_km(&self) -> f64 {
        self.action_count as f64 * STEP_LENGTH_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        round2(self.distance_km() / self.duration_hours)
    }

    // Left unrounded to match the reference figures.
    fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let height_m = self.height_cm / CM_IN_M;
        let duration_minutes = self.duration_hours * MIN_IN_HOUR;
        (WALK_WEIGHT_COEFFICIENT * self.weight_kg
            + (speed.powi(2) / height_m) * WALK_SPEED_HEIGHT_COEFFICIENT * self.weight_kg)
            * duration_minutes
    }
}

impl Metrics for Swimming {
    fn distance_km(&self) -> f64 {
        self.pool_count as f64 * self.pool_length_m / M_IN_KM
    }

    // Unrounded, unlike the step-based workouts.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        round2((speed + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.weight_kg * self.duration_hours)
    }
}

impl Metrics for Workout {
    fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::Walking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::Walking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    fn calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.calories(),
            Workout::Walking(w) => w.calories(),
            Workout::Swimming(w) => w.calories(),
        }
    }
}
