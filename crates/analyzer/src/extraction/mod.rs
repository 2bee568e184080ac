//! File extraction: converts an uploaded resume payload into trimmed plain
//! text tagged with its detected format.
//!
//! Format detection goes by the filename's final extension, never by the
//! browser-declared MIME type. Decoding runs on the blocking pool so
//! concurrent analyses of different files stay independent.

mod docx;
mod pdf;

use std::fmt;
use std::future::Future;

use anyhow::{anyhow, Context};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AnalyzeError;

/// Uploads larger than this are rejected before any decoding happens.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// MIME types accepted at upload. Extension matching is the fallback gate:
/// browsers report unreliable types for legacy `.doc`, so a file passes
/// validation if either its declared type or its extension is acceptable.
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/msword",
    "text/plain",
];

/// A resume file as handed over by the upload surface. Transient: owned by
/// the caller for the duration of one analysis, never persisted.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    /// Browser-declared MIME type. Advisory only; format detection uses the
    /// filename extension.
    pub content_type: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Detected resume format, derived solely from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Txt,
}

impl FileType {
    /// Maps the final extension, case-insensitively: `.pdf` is Pdf,
    /// `.docx`/`.doc` are Docx, `.txt` is Txt. Anything else is
    /// [`AnalyzeError::UnsupportedFormat`].
    pub fn from_file_name(file_name: &str) -> Result<Self, AnalyzeError> {
        // A name without a dot has no extension at all, even if the name
        // itself happens to read like one (a file literally called "txt").
        let Some((_, extension)) = file_name.rsplit_once('.') else {
            return Err(AnalyzeError::UnsupportedFormat(file_name.to_string()));
        };
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Ok(FileType::Pdf),
            "docx" | "doc" => Ok(FileType::Docx),
            "txt" => Ok(FileType::Txt),
            _ => Err(AnalyzeError::UnsupportedFormat(extension)),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FileType::Pdf => "pdf",
            FileType::Docx => "docx",
            FileType::Txt => "txt",
        })
    }
}

/// Normalized text plus provenance for one extracted resume. Immutable once
/// built; consumed by the scorer and then discarded or cached by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub file_name: String,
    pub file_type: FileType,
    pub extracted_at: DateTime<Utc>,
}

/// Pre-extraction gate: enforces the 10 MiB limit and the type/extension
/// allow-list. A file is accepted when either its declared MIME type or its
/// extension is acceptable.
pub fn validate(file: &UploadedFile) -> Result<(), AnalyzeError> {
    if file.len() > MAX_UPLOAD_BYTES {
        return Err(AnalyzeError::ValidationRejected(
            "File size must be less than 10MB".to_string(),
        ));
    }

    let type_allowed = ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str());
    let extension_allowed = FileType::from_file_name(&file.file_name).is_ok();
    if !type_allowed && !extension_allowed {
        return Err(AnalyzeError::ValidationRejected(
            "Only PDF, DOCX, and TXT files are supported".to_string(),
        ));
    }

    Ok(())
}

/// Converts an uploaded file into trimmed plain text tagged with its format.
///
/// The decode runs on the blocking pool; callers may await many extractions
/// concurrently. Decoder warnings (undecodable pdf pages, unrecognized docx
/// structure) are logged and skipped, never surfaced as errors. Decode
/// failures become [`AnalyzeError::Extraction`] carrying the file name and
/// the underlying cause.
pub async fn extract(file: UploadedFile) -> Result<ExtractedDocument, AnalyzeError> {
    let file_type = FileType::from_file_name(&file.file_name)?;
    let file_name = file.file_name.clone();
    let data = file.data.clone();

    let decoded = tokio::task::spawn_blocking(move || decode(file_type, &data))
        .await
        .map_err(|e| AnalyzeError::Extraction {
            file_name: file_name.clone(),
            source: anyhow!(e),
        })?;

    let text = decoded.map_err(|source| AnalyzeError::Extraction {
        file_name: file_name.clone(),
        source,
    })?;

    debug!(
        file = %file_name,
        format = %file_type,
        bytes = file.len(),
        "extracted resume text"
    );

    Ok(ExtractedDocument {
        text: text.trim().to_string(),
        file_name,
        file_type,
        extracted_at: Utc::now(),
    })
}

/// Same as [`extract`], but races the decode against a caller-supplied
/// cancellation signal. Malformed-file parsing is unbounded, so interactive
/// callers should pass a timeout or abort future here. An already-fired
/// signal wins immediately.
pub async fn extract_with_cancel(
    file: UploadedFile,
    cancel: impl Future<Output = ()>,
) -> Result<ExtractedDocument, AnalyzeError> {
    tokio::select! {
        biased;
        _ = cancel => Err(AnalyzeError::Cancelled),
        result = extract(file) => result,
    }
}

fn decode(file_type: FileType, data: &[u8]) -> anyhow::Result<String> {
    match file_type {
        FileType::Pdf => pdf::extract_text(data),
        FileType::Docx => docx::extract_text(data),
        FileType::Txt => {
            String::from_utf8(data.to_vec()).context("file is not valid UTF-8")
        }
    }
}
