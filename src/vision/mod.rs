// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision processing: image decoding and object detection

pub mod detector;
pub mod image_utils;

pub use detector::{Detection, Detector, DetectorError, PlaceholderDetector};
pub use image_utils::{decode_image_bytes, detect_format, ImageError, ImageInfo};
