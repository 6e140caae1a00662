use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use workout_tracker::config::Config;
use workout_tracker::pipeline::{self, render};
use workout_tracker::routes;
use workout_tracker::state::AppState;
use workout_tracker::types::workout::Package;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_tracker=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    match std::env::args().nth(1).as_deref() {
        Some("serve") => serve(config).await,
        Some(other) => {
            tracing::error!("Unknown command: {} (expected `serve` or no argument)", other);
            std::process::exit(2);
        }
        None => print_sample_batch(),
    }
}

fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn print_sample_batch() {
    let packages = sample_packages();
    for summary in pipeline::run_batch(&packages).into_iter().flatten() {
        println!("{}", render::render_message(&summary));
    }
}

async fn serve(config: Config) {
    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config);

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::summary::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Workout tracker listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Summary: POST http://{}/api/summary", addr);
    tracing::info!("Batch: POST http://{}/api/summaries", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
