use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw sensor fields for one session, in the order the device reports them.
pub type Reading = Vec<f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Reading,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Reading>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::Walking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "Sports walking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of reading fields the device sends for this kind.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking | WorkoutKind::Swimming => 4,
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub pool_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
}

/// A validated session. Every variant has `duration_hours > 0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Walking(_) => WorkoutKind::Walking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            Workout::Running(w) => w.duration_hours,
            Workout::Walking(w) => w.duration_hours,
            Workout::Swimming(w) => w.duration_hours,
        }
    }
}
