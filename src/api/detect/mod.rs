// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection API endpoint module
//!
//! Provides POST /detect for running object detection on an uploaded image.

pub mod handler;
pub mod upload;

pub use handler::{detect_handler, run_detection};
pub use upload::{read_file_part, UploadedFile, FILE_FIELD};
