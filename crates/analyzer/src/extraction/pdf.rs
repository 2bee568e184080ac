use anyhow::{bail, Context, Result};
use lopdf::Document;
use tracing::warn;

/// Full per-page text parse of a PDF payload.
///
/// Pages are walked in page order 1..N; each page's text is appended
/// followed by a newline. A page that fails to decode is logged and
/// skipped rather than failing the whole extraction. A document yielding
/// no text at all (typically a scanned image) is an error, since the
/// scorer would only ever see an empty string.
pub(crate) fn extract_text(data: &[u8]) -> Result<String> {
    let doc = Document::load_mem(data).context("could not parse PDF container")?;

    let mut text = String::new();
    for (&page_number, _) in doc.get_pages().iter() {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                warn!(page = page_number, error = %e, "skipping undecodable PDF page");
            }
        }
    }

    if text.trim().is_empty() {
        bail!("no text could be extracted (is this a scanned image?)");
    }
    Ok(text)
}
