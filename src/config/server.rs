// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Server configuration loaded from command-line flags and environment variables

use anyhow::{anyhow, Result};
use clap::Parser;
use std::net::SocketAddr;

/// Default port expected by the container orchestration
pub const DEFAULT_PORT: u16 = 5000;

/// Maximum uploaded image size (10MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Extra body allowance for multipart boundaries and part headers
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Tray detection HTTP service
#[derive(Parser, Debug, Clone)]
#[command(name = "tray-detect")]
#[command(about = "HTTP endpoint returning object detections for an uploaded image", long_about = None)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on
    #[arg(long, env = "DETECT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP listener on
    #[arg(long, env = "DETECT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Largest image accepted by POST /detect, in bytes
    #[arg(long, env = "DETECT_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    /// Disable the permissive CORS layer
    #[arg(long, env = "DETECT_DISABLE_CORS")]
    pub disable_cors: bool,
}

impl ServerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(anyhow!("Port must be greater than 0"));
        }
        if self.max_upload_bytes == 0 {
            return Err(anyhow!("Upload limit must be greater than 0"));
        }
        self.bind_addr()?;
        Ok(())
    }

    /// Socket address the listener binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("Invalid bind address {}:{}: {}", self.host, self.port, e))
    }

    /// HTTP body limit: the image limit plus multipart framing
    pub fn body_limit_bytes(&self) -> usize {
        self.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            disable_cors: false,
        }
    }
}
