// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Extraction of the uploaded file part from a multipart form

use axum::{
    body::Bytes,
    http::{header, StatusCode},
};
use axum_extra::extract::{multipart::MultipartError, Multipart};
use tracing::{debug, warn};

use crate::api::errors::DetectError;

/// Form field that carries the image
pub const FILE_FIELD: &str = "file";

/// A file part read from the request body
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    /// Declared content type, logged only
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Read the first file part named `field_name`.
///
/// Only parts with a `filename` parameter count as file parts; a plain form
/// field with the same name is skipped, and so is a bare `filename=` with no
/// value. A body that fails to parse is treated as having no file part,
/// unless it was cut off by the body size limit.
pub async fn read_file_part(
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<UploadedFile, DetectError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(DetectError::MissingFilePart),
            Err(e) => {
                warn!("Malformed multipart body: {}", e);
                return Err(DetectError::MissingFilePart);
            }
        };

        if field.name() != Some(field_name) {
            continue;
        }

        let Some(filename) = field.file_name().map(str::to_owned) else {
            debug!("Skipping non-file form field '{}'", field_name);
            continue;
        };

        if filename.is_empty() {
            let quoted = field
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok())
                .is_some_and(has_quoted_filename);
            if !quoted {
                debug!("Skipping '{}' part with a bare empty filename", field_name);
                continue;
            }
            return Err(DetectError::EmptyFilename);
        }

        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(stream_error)?;

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes,
        });
    }
}

fn stream_error(e: MultipartError) -> DetectError {
    classify_stream_error(e.status(), e.to_string())
}

/// Map a failure while reading a file part's content.
///
/// Hitting the body limit is a processing error; anything else means the
/// form was malformed and is discarded like any unparseable form.
fn classify_stream_error(status: StatusCode, message: String) -> DetectError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Upload exceeded body limit: {}", message);
        DetectError::Upload(message)
    } else {
        warn!("Malformed multipart body in file part: {}", message);
        DetectError::MissingFilePart
    }
}

/// Whether a Content-Disposition value carries `filename="..."` in quotes
fn has_quoted_filename(disposition: &str) -> bool {
    disposition
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("filename="))
        .any(|value| value.starts_with('"'))
}
