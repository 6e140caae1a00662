use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::types::workout::WorkoutKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("Invalid workout type: {0}")]
    InvalidWorkoutType(String),
    #[error("Malformed {kind} reading (expected {expected} fields, got {actual})")]
    MalformedReading {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Workout(#[from] WorkoutError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Workout(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
