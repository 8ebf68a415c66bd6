// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect;
pub mod errors;
pub mod health;
pub mod http_server;

pub use detect::detect_handler;
pub use errors::{DetectError, ErrorResponse};
pub use health::health_handler;
pub use http_server::{create_app, start_server, AppState};
