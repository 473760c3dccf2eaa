pub mod docx;
pub mod native;
pub mod pdftotext;

use crate::error::DocbriefError;
use crate::model::{DocumentKind, ExtractedText, Extraction, UploadedDocument};
use std::fmt;
use std::str::FromStr;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page
    /// in physical page order.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, DocbriefError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Selectable PDF backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PdfBackend {
    #[default]
    Lopdf,
    Pdftotext,
}

impl PdfBackend {
    pub fn extractor(&self) -> Box<dyn PdfExtractor> {
        match self {
            PdfBackend::Lopdf => Box::new(native::LopdfExtractor::new()),
            PdfBackend::Pdftotext => Box::new(pdftotext::PdftotextExtractor::new()),
        }
    }
}

impl FromStr for PdfBackend {
    type Err = DocbriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lopdf" => Ok(PdfBackend::Lopdf),
            "pdftotext" => Ok(PdfBackend::Pdftotext),
            other => Err(DocbriefError::Config(format!(
                "unknown PDF backend '{other}'. Available: lopdf, pdftotext"
            ))),
        }
    }
}

impl fmt::Display for PdfBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfBackend::Lopdf => write!(f, "lopdf"),
            PdfBackend::Pdftotext => write!(f, "pdftotext"),
        }
    }
}

/// Extract the visible text of an upload, or report that its type is unsupported.
///
/// The bytes are only inspected when the declared MIME type is recognized.
pub fn extract(
    document: &UploadedDocument,
    pdf_extractor: &dyn PdfExtractor,
) -> Result<Extraction, DocbriefError> {
    let Some(kind) = document.kind() else {
        tracing::info!(mime_type = %document.mime_type, "unsupported upload type");
        return Ok(Extraction::Unsupported {
            mime_type: document.mime_type.clone(),
        });
    };

    let extracted = match kind {
        DocumentKind::Pdf => {
            let pages = pdf_extractor.extract_pages(&document.bytes)?;
            tracing::debug!(backend = pdf_extractor.backend_name(), pages = pages.len(), "PDF pages read");
            ExtractedText {
                kind,
                units: pages.len(),
                text: join_pages(&pages),
            }
        }
        DocumentKind::Docx => {
            let paragraphs = docx::read_paragraphs(&document.bytes)?;
            ExtractedText {
                kind,
                units: paragraphs.len(),
                text: docx::join_paragraphs(&paragraphs),
            }
        }
    };

    tracing::debug!(
        kind = %kind,
        units = extracted.units,
        chars = extracted.char_count(),
        "extracted document text"
    );

    Ok(Extraction::Text(extracted))
}

/// Join page texts with `\n` in page order.
pub fn join_pages(pages: &[PageContent]) -> String {
    pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
