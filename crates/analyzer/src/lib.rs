//! Resume review core: turns an uploaded resume file into normalized plain
//! text and a deterministic rubric score with actionable feedback.
//!
//! Two components run in sequence per upload. The extractor
//! ([`extraction`]) converts a file payload (bytes plus declared name)
//! into trimmed text tagged with its detected format; the scorer
//! ([`scoring`]) maps that text to a structured 0-100 score. Neither
//! retains state across calls, so concurrent analyses of different files
//! are independent.
//!
//! The crate is a library only: the upload surface, rendering, and any
//! job-listing views live with the consumer.

pub mod errors;
pub mod extraction;
pub mod scoring;

use serde::Serialize;

pub use errors::AnalyzeError;
pub use extraction::{
    extract, extract_with_cancel, validate, ExtractedDocument, FileType, UploadedFile,
};
pub use scoring::{analyze_resume, ResumeScore, ScoreBreakdown, Subscore};

/// Everything produced by one analysis run: the extracted document plus
/// its score. The caller renders or caches it; the crate keeps nothing.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub document: ExtractedDocument,
    pub score: ResumeScore,
}

/// Full pipeline for one upload: validate, extract, score.
///
/// Any error is terminal for this attempt; the caller should let the user
/// pick a new file rather than retrying automatically.
pub async fn analyze(file: UploadedFile) -> Result<ResumeAnalysis, AnalyzeError> {
    extraction::validate(&file)?;
    let document = extraction::extract(file).await?;
    let score = scoring::analyze_resume(&document.text);
    Ok(ResumeAnalysis { document, score })
}
