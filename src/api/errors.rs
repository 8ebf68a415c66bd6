// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vision::{DetectorError, ImageError};

/// JSON body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures of `POST /detect`, first failure wins
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Error processing image: {0}")]
    Upload(String),

    #[error("Error processing image: {0}")]
    Decode(#[from] ImageError),

    #[error("Error processing image: {0}")]
    Inference(#[from] DetectorError),

    #[error("Unknown error")]
    Unknown,
}

impl DetectError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DetectError::MissingFilePart | DetectError::EmptyFilename => StatusCode::BAD_REQUEST,
            DetectError::Upload(_)
            | DetectError::Decode(_)
            | DetectError::Inference(_)
            | DetectError::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for DetectError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_response())).into_response()
    }
}
