// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Health check endpoint

/// Body returned by `GET /`
pub const HEALTH_MESSAGE: &str = "Python API is running!";

/// GET / - Liveness check, always 200
pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}
