use thiserror::Error;

/// Analysis-level error type.
///
/// Every variant is terminal for the attempt that produced it: the caller
/// surfaces the message once and lets the user pick a new file rather than
/// retrying automatically.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Pre-flight rejection: oversized payload or disallowed type.
    #[error("Validation error: {0}")]
    ValidationRejected(String),

    /// The filename extension is not one of pdf/doc/docx/txt.
    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    /// A format decoder failed mid-extraction (e.g. a corrupt docx container).
    #[error("Failed to extract text from {file_name}: {source}")]
    Extraction {
        file_name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The caller's cancellation signal fired while a decode was in flight.
    #[error("Extraction cancelled")]
    Cancelled,
}
