//! End-to-end pipeline tests: validate, extract, score against in-memory
//! pdf/docx/txt fixtures.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use resume_analyzer::{analyze, AnalyzeError, FileType, UploadedFile};

const SAMPLE_RESUME: &str = "Education\n\
    BSc Computer Science, 2019\n\
    Experience\n\
    Backend engineer at Acme, 2019 2021\n\
    Cut API latency by 40% across 3 services\n\
    Skills\n\
    Python SQL React Node.js Docker AWS\n\
    Communication Leadership Problem Solving\n\
    Projects\n\
    email: jane@example.com phone: 555-0100";

fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for p in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*p)));
    }
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("pack docx");
    cursor.into_inner()
}

/// Builds a one-page PDF with one text line per `Tj` operation.
fn pdf_fixture(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 750.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).expect("serialize pdf");
    out
}

#[tokio::test]
async fn txt_upload_flows_through_to_a_score() {
    let file = UploadedFile::new("resume.txt", "text/plain", SAMPLE_RESUME.as_bytes().to_vec());
    let analysis = analyze(file).await.expect("analyze txt");

    assert_eq!(analysis.document.file_type, FileType::Txt);
    assert_eq!(analysis.document.text, SAMPLE_RESUME);

    let b = &analysis.score.breakdown;
    assert_eq!(b.section_completeness, 25);
    assert_eq!(b.quantified_achievements, 10);
    assert_eq!(b.ats_compliance, 20);
    assert_eq!(
        analysis.score.overall_score,
        b.section_completeness
            + b.keyword_relevance
            + b.ats_compliance
            + b.quantified_achievements
            + b.grammar_quality
            + b.resume_length
    );
}

#[tokio::test]
async fn txt_extraction_preserves_content_modulo_trim() {
    let padded = format!("\n\n  {SAMPLE_RESUME}  \n");
    let file = UploadedFile::new("resume.txt", "text/plain", padded.into_bytes());
    let analysis = analyze(file).await.expect("analyze txt");
    assert_eq!(analysis.document.text, SAMPLE_RESUME);
}

#[tokio::test]
async fn docx_upload_is_decoded_and_scored() {
    let bytes = docx_fixture(&[
        "Education",
        "Experience at Acme 2019 2021",
        "Improved throughput by 30%",
        "Skills: Python, SQL",
    ]);
    let file = UploadedFile::new(
        "resume.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        bytes,
    );
    let analysis = analyze(file).await.expect("analyze docx");

    assert_eq!(analysis.document.file_type, FileType::Docx);
    assert!(analysis.document.text.contains("Experience at Acme"));
    assert_eq!(analysis.score.breakdown.quantified_achievements, 10);
    assert_eq!(analysis.score.breakdown.ats_compliance, 20);
}

#[tokio::test]
async fn legacy_doc_extension_takes_the_docx_path() {
    let bytes = docx_fixture(&["Education and Experience"]);
    // Browsers often report a junk MIME type for .doc uploads.
    let file = UploadedFile::new("resume.doc", "application/octet-stream", bytes);
    let analysis = analyze(file).await.expect("analyze doc");
    assert_eq!(analysis.document.file_type, FileType::Docx);
    assert_eq!(analysis.document.text, "Education and Experience");
}

#[tokio::test]
async fn pdf_upload_is_parsed_page_by_page() {
    let bytes = pdf_fixture(&["Education 2019", "Experience 2021"]);
    let file = UploadedFile::new("resume.pdf", "application/pdf", bytes);
    let analysis = analyze(file).await.expect("analyze pdf");

    assert_eq!(analysis.document.file_type, FileType::Pdf);
    assert!(analysis.document.text.contains("Education"));
    assert!(analysis.document.text.contains("Experience"));
}

#[tokio::test]
async fn textless_pdf_is_an_extraction_failure() {
    let bytes = pdf_fixture(&[]);
    let file = UploadedFile::new("scan.pdf", "application/pdf", bytes);
    let err = analyze(file).await.unwrap_err();
    assert!(matches!(err, AnalyzeError::Extraction { ref file_name, .. } if file_name == "scan.pdf"));
}

#[tokio::test]
async fn corrupt_docx_surfaces_the_file_name() {
    let file = UploadedFile::new(
        "broken.docx",
        "application/msword",
        b"zip? never heard of it".to_vec(),
    );
    let err = analyze(file).await.unwrap_err();
    assert!(err.to_string().contains("broken.docx"));
}

#[tokio::test]
async fn oversized_upload_is_rejected_before_decoding() {
    let file = UploadedFile::new(
        "resume.pdf",
        "application/pdf",
        vec![0u8; 10 * 1024 * 1024 + 1],
    );
    let err = analyze(file).await.unwrap_err();
    assert!(matches!(err, AnalyzeError::ValidationRejected(_)));
}

#[tokio::test]
async fn unsupported_extension_with_accepted_mime_fails_at_extraction() {
    // Validation passes on the MIME gate, but format detection goes by the
    // extension alone.
    let file = UploadedFile::new("resume.rtf", "text/plain", b"hello".to_vec());
    let err = analyze(file).await.unwrap_err();
    assert!(matches!(err, AnalyzeError::UnsupportedFormat(ref ext) if ext == "rtf"));
}

#[tokio::test]
async fn identical_uploads_score_identically() {
    let make = || {
        UploadedFile::new("resume.txt", "text/plain", SAMPLE_RESUME.as_bytes().to_vec())
    };
    let first = analyze(make()).await.expect("first run");
    let second = analyze(make()).await.expect("second run");
    assert_eq!(first.score, second.score);
}
