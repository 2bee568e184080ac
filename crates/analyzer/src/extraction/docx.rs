use anyhow::{anyhow, Result};
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

/// Raw visible text from an OOXML word-processing container: paragraph
/// runs concatenated, paragraphs separated by newlines, all formatting
/// discarded. Structure the reader does not recognize (tables, hyperlinks,
/// revision marks) is simply skipped; only a broken container is fatal.
pub(crate) fn extract_text(data: &[u8]) -> Result<String> {
    let docx = read_docx(data).map_err(|e| anyhow!("could not parse DOCX container: {e}"))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::io::Cursor;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for p in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).expect("pack docx");
        cursor.into_inner()
    }

    #[test]
    fn test_paragraph_runs_become_newline_separated_text() {
        let bytes = docx_bytes(&["Education", "Experience at Acme 2019-2021"]);
        let text = extract_text(&bytes).unwrap();
        assert_eq!(text, "Education\nExperience at Acme 2019-2021\n");
    }

    #[test]
    fn test_empty_document_yields_empty_text() {
        let bytes = docx_bytes(&[]);
        assert_eq!(extract_text(&bytes).unwrap(), "");
    }

    #[test]
    fn test_corrupt_container_is_an_error() {
        let err = extract_text(b"not a zip archive").unwrap_err();
        assert!(err.to_string().contains("could not parse DOCX container"));
    }
}
