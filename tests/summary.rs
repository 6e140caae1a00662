use axum::{body::to_bytes, http::Request, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use workout_tracker::{config::Config, routes, state::AppState};

fn app_with(config: Config) -> Router {
    let state = AppState::new(config);
    Router::new()
        .merge(routes::health::router())
        .merge(routes::summary::router())
        .with_state(state)
}

fn app() -> Router {
    app_with(Config::from_env())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

#[tokio::test]
async fn summary_returns_metrics_and_message() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({ "workout_type": "SWM", "data": [720, 1, 80, 25] }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["summary"]["training_type"], "Swimming");
    assert_eq!(body["summary"]["kind"], "swimming");
    assert_eq!(body["summary"]["distance_km"].as_f64(), Some(18.0));
    assert_eq!(body["summary"]["calories"].as_f64(), Some(3056.0));
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Type: Swimming; Duration: 1.000 h; Distance: 18.000 km"));
}

#[tokio::test]
async fn summary_rejects_unknown_workout_type() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({ "workout_type": "XYZ", "data": [1, 1, 1] }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("XYZ"));
}

#[tokio::test]
async fn summary_rejects_zero_duration() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({ "workout_type": "RUN", "data": [15000, 0, 75] }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("duration"));
}

#[tokio::test]
async fn batch_isolates_failing_entries() {
    let (status, body) = post_json(
        app(),
        "/api/summaries",
        json!({
            "packages": [
                { "workout_type": "RUN", "data": [15000, 1, 75] },
                { "workout_type": "WLK", "data": [9000, 1, 75] },
                { "workout_type": "SWM", "data": [720, 1, 80, 25] }
            ]
        }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::OK);
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["summary"]["training_type"], "Running");
    assert!(results[1]["error"]
        .as_str()
        .expect("error")
        .contains("expected 4 fields, got 3"));
    assert_eq!(results[2]["summary"]["training_type"], "Swimming");
}

#[tokio::test]
async fn batch_over_limit_is_rejected() {
    let config = Config {
        port: 0,
        max_batch_size: 1,
    };
    let (status, _) = post_json(
        app_with(config),
        "/api/summaries",
        json!({
            "packages": [
                { "workout_type": "RUN", "data": [15000, 1, 75] },
                { "workout_type": "RUN", "data": [15000, 1, 75] }
            ]
        }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn summary_rejects_overflowing_metrics() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({ "workout_type": "SWM", "data": [720, 1e-310, 80, 25] }),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("out of range"));
}
