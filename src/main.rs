// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use std::{env, sync::Arc};
use tray_detect::{
    api::start_server,
    config::ServerConfig,
    version,
    vision::{Detector, PlaceholderDetector},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    tracing::info!("Starting {}", version::get_version_string());

    let config = ServerConfig::parse();
    config.validate()?;

    // Swap in a model-backed detector here once inference is available
    let detector: Arc<dyn Detector> = Arc::new(PlaceholderDetector::new());

    tracing::info!(
        "Detector: {}, upload limit: {} bytes, CORS: {}",
        detector.name(),
        config.max_upload_bytes,
        if config.disable_cors { "disabled" } else { "enabled" }
    );

    start_server(config, detector).await
}
