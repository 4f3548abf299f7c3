//! Resume upload → plain text, for pasting into the optimizer.
//!
//! PDF goes through `pdf-extract`; plain text and markdown are decoded as UTF-8.
//! Anything else (DOCX included) is rejected.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;

const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    PlainText,
}

impl ResumeFormat {
    /// Decides the format from the part's content type, then its file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type.map(|c| c.to_ascii_lowercase()) {
            Some(c) if c == "application/pdf" => return Some(ResumeFormat::Pdf),
            Some(c) if c == "text/plain" || c == "text/markdown" => {
                return Some(ResumeFormat::PlainText)
            }
            _ => {}
        }

        let extension = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(ResumeFormat::Pdf),
            "txt" | "md" => Some(ResumeFormat::PlainText),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
    pub characters: usize,
}

pub fn extract_text(format: ResumeFormat, data: &[u8]) -> Result<String, AppError> {
    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?,
        ResumeFormat::PlainText => String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("Text file is not valid UTF-8".to_string()))?,
    };

    let text = normalize_whitespace(&text);
    if text.is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the file".to_string(),
        ));
    }
    Ok(text)
}

/// Strips trailing whitespace and collapses runs of blank lines into one.
fn normalize_whitespace(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(if line.trim().is_empty() { "" } else { line });
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// POST /api/v1/resumes/extract (multipart, field `file`)
pub async fn handle_extract_resume(
    AuthUser(user_id): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let format = ResumeFormat::detect(field.content_type(), field.file_name()).ok_or_else(
            || AppError::Validation("Only PDF and plain-text resumes are supported".to_string()),
        )?;
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;

        // pdf-extract is blocking and may panic on malformed files.
        let text = tokio::task::spawn_blocking(move || extract_text(format, &data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Text extraction task failed: {e}")))??;
        info!(
            "Extracted {} characters from {format:?} upload for user {user_id}",
            text.len()
        );

        return Ok(Json(ExtractResponse {
            characters: text.chars().count(),
            text,
        }));
    }

    Err(AppError::Validation(format!(
        "Upload must include a '{FILE_FIELD}' field"
    )))
}
