//! PDF text extraction for uploaded resumes and certificates.

use axum::extract::Multipart;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

use crate::errors::AppError;

/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("could not parse PDF: {0}")]
    Extract(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

/// Simple counts the readiness formulas work from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub digits: usize,
    pub characters: usize,
}

/// Extracts the text layer of a PDF held in memory.
/// Blank lines are dropped and trailing whitespace trimmed per line.
pub fn extract_pdf_text(data: &[u8]) -> Result<String, PdfError> {
    if data.is_empty() {
        return Err(PdfError::Empty);
    }
    let raw = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| PdfError::Extract(e.to_string()))?;
    let text = normalize_text(&raw);
    if text.is_empty() {
        return Err(PdfError::NoText);
    }
    Ok(text)
}

/// Runs extraction on the blocking pool. Some malformed fonts make the
/// parser panic, which surfaces here as a join error instead of a crash.
pub async fn extract_pdf_text_blocking(data: Bytes) -> Result<String, PdfError> {
    tokio::task::spawn_blocking(move || extract_pdf_text(&data))
        .await
        .map_err(|e| PdfError::Extract(format!("extraction task failed: {e}")))?
}

fn normalize_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        words: text.split_whitespace().count(),
        digits: text.chars().filter(|c| c.is_ascii_digit()).count(),
        characters: text.chars().count(),
    }
}

/// Pulls the bytes of the `file` field out of a multipart body.
pub async fn read_file_field(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(FILE_FIELD) {
            let data: Bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            return Ok(data);
        }
    }
    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}
