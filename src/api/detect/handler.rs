// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::{multipart::MultipartRejection, Multipart};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::upload::{read_file_part, FILE_FIELD};
use crate::api::errors::DetectError;
use crate::api::http_server::AppState;
use crate::vision::{decode_image_bytes, Detection, Detector};

/// POST /detect - Detect objects in an uploaded image
///
/// Accepts a multipart form whose `file` part holds the image bytes.
///
/// # Response
/// JSON array of `{"box": [x1, y1, x2, y2], "label": ..., "confidence": ...}`
///
/// # Errors
/// - 400 Bad Request: no `file` part, or the part has an empty filename
/// - 500 Internal Server Error: the bytes could not be read, decoded or run
///   through the detector
pub async fn detect_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<Detection>>, DetectError> {
    let mut multipart = multipart.map_err(|e| {
        warn!("Detect request is not a multipart form: {}", e);
        DetectError::MissingFilePart
    })?;

    let upload = read_file_part(&mut multipart, FILE_FIELD)
        .await
        .map_err(|e| {
            warn!("Detect request rejected: {}", e);
            e
        })?;

    debug!(
        "Detect request received: filename={}, content_type={:?}, {} bytes",
        upload.filename,
        upload.content_type,
        upload.bytes.len()
    );

    let started = Instant::now();
    let detector = state.detector.clone();
    let max_bytes = state.max_upload_bytes;

    let detections = tokio::task::spawn_blocking(move || {
        run_detection(detector.as_ref(), &upload.bytes, max_bytes)
    })
    .await
    .map_err(|e| {
        warn!("Detection worker did not complete: {}", e);
        DetectError::Unknown
    })?
    .map_err(|e| {
        warn!("Detection failed: {}", e);
        e
    })?;

    info!(
        "Detection complete: {} objects, {}ms",
        detections.len(),
        started.elapsed().as_millis()
    );

    Ok(Json(detections))
}

/// Decode `bytes` and run them through `detector`
pub fn run_detection(
    detector: &dyn Detector,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<Vec<Detection>, DetectError> {
    let (image, info) = decode_image_bytes(bytes, max_bytes)?;

    debug!(
        "Decoded {:?} image: {}x{}, {} bytes",
        info.format,
        info.width,
        info.height,
        info.size_bytes
    );

    Ok(detector.detect(&image)?)
}
