// SPDX-License-Identifier: MIT
// Copyright 2026 OctoFit Tracker Developers

//! OctoFit Tracker API Server
//!
//! Logs workouts, credits fitness points, and keeps team totals and
//! leaderboards for the OctoFit web client.

use octofit_tracker::{config::Config, db::MemoryDb, routes, seed, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting OctoFit Tracker API");

    let state = Arc::new(AppState::new(config.clone(), MemoryDb::new()));

    if config.seed_sample_data {
        seed::load_sample_data(&state)?;
    }

    let app = routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("octofit_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
