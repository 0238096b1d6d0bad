//! Axum route handler for document upload and text extraction.

use axum::extract::Multipart;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::text::extract::{extract_text, ExtractError, FileType};

/// Multipart field carrying the uploaded document.
const FILE_FIELD: &str = "file";

/// Upload size cap for `POST /api/extract`.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub file_name: Option<String>,
    pub file_type: &'static str,
    pub text: String,
    pub characters: usize,
}

/// POST /api/extract
///
/// Accepts a PDF, DOCX or plain-text upload in the `file` field and returns its text,
/// ready to paste into the analyze or generate requests.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) = upload.ok_or_else(|| {
        AppError::Validation(format!("Missing required field: {FILE_FIELD}"))
    })?;

    let file_type = FileType::detect(file_name.as_deref(), &data).ok_or_else(|| {
        ExtractError::UnsupportedFileType(file_name.clone().unwrap_or_else(|| "unknown".into()))
    })?;

    info!(
        "Extracting text from {} upload ({} bytes)",
        file_type.as_str(),
        data.len()
    );

    // PDF and DOCX decoding are CPU-bound.
    let text = tokio::task::spawn_blocking(move || extract_text(&data, file_type))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))??;

    Ok(Json(ExtractResponse {
        file_name,
        file_type: file_type.as_str(),
        characters: text.chars().count(),
        text,
    }))
}
