use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::pipeline::{self, render};
use crate::state::AppState;
use crate::types::summary::Summary;
use crate::types::workout::Package;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/summary", post(summary))
        .route("/api/summaries", post(summaries))
}

#[derive(Serialize, Deserialize)]
struct SummaryResponse {
    summary: Summary,
    message: String,
}

impl SummaryResponse {
    fn new(summary: Summary) -> Self {
        let message = render::render_message(&summary);
        Self { summary, message }
    }
}

#[derive(Deserialize)]
struct BatchRequest {
    packages: Vec<Package>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum BatchEntry {
    Ok(SummaryResponse),
    Failed { error: String },
}

#[derive(Serialize)]
struct BatchResponse {
    results: Vec<BatchEntry>,
}

async fn summary(Json(package): Json<Package>) -> Result<Json<SummaryResponse>, AppError> {
    let summary = pipeline::summarize(&package.workout_type, &package.data)?;

    tracing::info!(
        "Summarized {} package: {:.3} km in {:.3} h",
        package.workout_type,
        summary.distance_km,
        summary.duration_hours
    );

    Ok(Json(SummaryResponse::new(summary)))
}

async fn summaries(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let max = state.config().max_batch_size;
    if request.packages.len() > max {
        return Err(AppError::BadRequest(format!(
            "Batch of {} packages exceeds the limit of {}",
            request.packages.len(),
            max
        )));
    }

    let results: Vec<BatchEntry> = pipeline::run_batch(&request.packages)
        .into_iter()
        .map(|result| match result {
            Ok(summary) => BatchEntry::Ok(SummaryResponse::new(summary)),
            Err(e) => BatchEntry::Failed {
                error: e.to_string(),
            },
        })
        .collect();

    let failed = results
        .iter()
        .filter(|entry| matches!(entry, BatchEntry::Failed { .. }))
        .count();
    tracing::info!(
        "Summarized batch of {} packages ({} failed)",
        results.len(),
        failed
    );

    Ok(Json(BatchResponse { results }))
}
