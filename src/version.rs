// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the tray detection service

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "multipart-upload",
    "content-sniffed-decoding",
    "placeholder-detector",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Tray Detect {} ({})", VERSION_NUMBER, BUILD_DATE)
}
