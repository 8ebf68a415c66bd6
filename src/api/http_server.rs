// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{detect::detect_handler, health::health_handler};
use crate::config::ServerConfig;
use crate::vision::{Detector, PlaceholderDetector};

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Detector built once at startup, read-only afterwards
    pub detector: Arc<dyn Detector>,
    /// Largest image accepted by POST /detect
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(detector: Arc<dyn Detector>, config: &ServerConfig) -> Self {
        Self {
            detector,
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// State with the placeholder detector and default limits
    pub fn new_for_test() -> Self {
        Self::new(Arc::new(PlaceholderDetector::new()), &ServerConfig::default())
    }
}

/// Build the router for the detection API
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        // Health check
        .route("/", get(health_handler))
        // Detection endpoint
        .route("/detect", post(detect_handler))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if config.disable_cors {
        app
    } else {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    }
}

/// Bind the listener and serve until Ctrl-C
pub async fn start_server(config: ServerConfig, detector: Arc<dyn Detector>) -> Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState::new(detector, &config);
    let app = create_app(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Detection API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Detection API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
