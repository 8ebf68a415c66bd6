// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Object detection records and the inference seam
//!
//! A [`Detector`] is built once at startup and shared read-only across
//! requests. Implementations that wrap a non-thread-safe runtime must do
//! their own locking inside `detect`.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single predicted object instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Corner coordinates `[x1, y1, x2, y2]` in pixels
    #[serde(rename = "box")]
    pub bbox: [i32; 4],
    pub label: String,
    /// Score in `[0, 1]`
    pub confidence: f64,
}

impl Detection {
    pub fn new(bbox: [i32; 4], label: impl Into<String>, confidence: f64) -> Self {
        Self {
            bbox,
            label: label.into(),
            confidence,
        }
    }

    /// Build a detection from floating-point `xyxy` model output.
    ///
    /// Coordinates are truncated toward zero.
    pub fn from_xyxy(coords: [f32; 4], label: impl Into<String>, confidence: f32) -> Self {
        Self::new(
            coords.map(|c| c as i32),
            label,
            f64::from(confidence),
        )
    }
}

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Model not loaded: {0}")]
    ModelNotLoaded(String),

    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

/// Runs object detection on a decoded image
#[cfg_attr(test, mockall::automock)]
pub trait Detector: Send + Sync {
    /// Name reported in startup logs
    fn name(&self) -> &'static str;

    fn detect(&self, image: &DynamicImage) -> Result<Vec<Detection>, DetectorError>;
}

/// Stand-in until a real model is wired in.
///
/// Ignores the image and always returns the same two detections.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderDetector;

impl PlaceholderDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn fixed_detections() -> Vec<Detection> {
        vec![
            Detection::new([10, 10, 50, 50], "trayWithFood", 0.95),
            Detection::new([60, 60, 100, 100], "food", 0.89),
        ]
    }
}

impl Detector for PlaceholderDetector {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn detect(&self, _image: &DynamicImage) -> Result<Vec<Detection>, DetectorError> {
        Ok(Self::fixed_detections())
    }
}
