//! Integration tests for the summarize_upload() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent and a stub
//! transport in place of the remote API, so these tests run offline.

use std::sync::atomic::{AtomicUsize, Ordering};

use docbrief_core::error::DocbriefError;
use docbrief_core::extraction::{PageContent, PdfExtractor};
use docbrief_core::model::{Outcome, SummaryText, UploadedDocument, DOCX_MIME, PDF_MIME};
use docbrief_core::profile::builtin::default_profile;
use docbrief_core::report::{render_docx, OutputDocument, REPORT_HEADING};
use docbrief_core::summarize::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatTransport, Role, Summarizer,
};
use docbrief_core::summarize_upload;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, DocbriefError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn mock_pdf(pages: &[&str]) -> MockExtractor {
    MockExtractor {
        pages: pages
            .iter()
            .enumerate()
            .map(|(i, t)| PageContent {
                page_number: i + 1,
                text: t.to_string(),
            })
            .collect(),
    }
}

/// Replies with the document text found after the prompt, counting calls.
#[derive(Default)]
struct EchoTransport {
    calls: AtomicUsize,
}

impl ChatTransport for EchoTransport {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, DocbriefError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let user = &request.messages[1].content;
        let document = user.split_once("\n\n").map(|(_, d)| d).unwrap_or(user);
        Ok(ChatResponse {
            choices: vec![ChatChoice {
                message: ChatMessage {
                    role: Role::Assistant,
                    content: document.to_string(),
                },
            }],
        })
    }
}

/// Fails every request as a network fault would.
#[derive(Default)]
struct FailingTransport {
    calls: AtomicUsize,
}

impl ChatTransport for FailingTransport {
    fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, DocbriefError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DocbriefError::Http("connection reset by peer".into()))
    }
}

// ---------------------------------------------------------------------------
// Scenario 1: PDF with one sentence, echoed summary, one-paragraph document
// ---------------------------------------------------------------------------
#[test]
fn pdf_summary_becomes_report() {
    let profile = default_profile().unwrap();
    let transport = EchoTransport::default();
    let summarizer = Summarizer::new(&profile, &transport);
    let extractor = mock_pdf(&["Revenue grew 10%."]);
    let upload = UploadedDocument::new(b"%PDF".to_vec(), PDF_MIME);

    let outcome = summarize_upload(&upload, &extractor, &summarizer).unwrap();

    let summary = match outcome {
        Outcome::Summarized { summary } => summary,
        other => panic!("expected summary, got {other:?}"),
    };
    assert_eq!(summary.as_str(), "Revenue grew 10%.");
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

    let mut doc = OutputDocument::build(&summary).unwrap();
    let paragraphs =
        docbrief_core::extraction::docx::read_paragraphs(&doc.bytes().unwrap()).unwrap();
    let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec![REPORT_HEADING, "Revenue grew 10%."]);
}

// ---------------------------------------------------------------------------
// Scenario 2: unsupported type never reaches the summarizer
// ---------------------------------------------------------------------------
#[test]
fn plain_text_upload_is_unsupported() {
    let profile = default_profile().unwrap();
    let transport = EchoTransport::default();
    let summarizer = Summarizer::new(&profile, &transport);
    let upload = UploadedDocument::new(b"hello".to_vec(), "text/plain");

    let outcome = summarize_upload(&upload, &mock_pdf(&["unused"]), &summarizer).unwrap();

    assert_eq!(
        outcome,
        Outcome::Unsupported {
            mime_type: "text/plain".into()
        }
    );
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Scenario 3: network fault aborts the run with no output
// ---------------------------------------------------------------------------
#[test]
fn network_fault_propagates() {
    let profile = default_profile().unwrap();
    let transport = FailingTransport::default();
    let summarizer = Summarizer::new(&profile, &transport);
    let upload = UploadedDocument::new(b"%PDF".to_vec(), PDF_MIME);

    let result = summarize_upload(&upload, &mock_pdf(&["Revenue grew 10%."]), &summarizer);

    assert!(matches!(result, Err(DocbriefError::Http(_))));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
}

// ---------------------------------------------------------------------------
// Multi-page PDFs are joined in page order before summarizing
// ---------------------------------------------------------------------------
#[test]
fn pages_joined_with_newlines() {
    let profile = default_profile().unwrap();
    let transport = EchoTransport::default();
    let summarizer = Summarizer::new(&profile, &transport);
    let upload = UploadedDocument::new(vec![], PDF_MIME);

    let outcome = summarize_upload(
        &upload,
        &mock_pdf(&["Page one", "Page two", "Page three"]),
        &summarizer,
    )
    .unwrap();

    assert_eq!(
        outcome,
        Outcome::Summarized {
            summary: SummaryText("Page one\nPage two\nPage three".into())
        }
    );
}

// ---------------------------------------------------------------------------
// A DOCX summary report can itself be uploaded and summarized
// ---------------------------------------------------------------------------
#[test]
fn docx_paragraphs_reach_summarizer() {
    let profile = default_profile().unwrap();
    let transport = EchoTransport::default();
    let summarizer = Summarizer::new(&profile, &transport);
    let bytes = render_docx(&SummaryText("Margins widened.\nDebt fell.".into())).unwrap();
    let upload = UploadedDocument::new(bytes, DOCX_MIME).with_file_name("q3.docx");

    let outcome = summarize_upload(&upload, &mock_pdf(&[]), &summarizer).unwrap();

    assert_eq!(
        outcome,
        Outcome::Summarized {
            summary: SummaryText(format!("{REPORT_HEADING}\nMargins widened.\nDebt fell."))
        }
    );
}

// ---------------------------------------------------------------------------
// Scanned PDFs without a text layer stop before the API call
// ---------------------------------------------------------------------------
#[test]
fn blank_pdf_yields_no_text() {
    let profile = default_profile().unwrap();
    let transport = EchoTransport::default();
    let summarizer = Summarizer::new(&profile, &transport);
    let upload = UploadedDocument::new(vec![], PDF_MIME);

    let outcome = summarize_upload(&upload, &mock_pdf(&["", "  "]), &summarizer).unwrap();

    assert_eq!(outcome, Outcome::NoText);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}
