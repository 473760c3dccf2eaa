pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod profile;
pub mod report;
pub mod summarize;

use error::DocbriefError;
use extraction::PdfExtractor;
use model::{Extraction, Outcome, UploadedDocument};
use summarize::Summarizer;

/// Main API entry point: extract an upload's text and summarize it.
///
/// Unsupported MIME types and documents without text stop before the
/// summarizer is called. Every other failure propagates as an error.
pub fn summarize_upload(
    document: &UploadedDocument,
    pdf_extractor: &dyn PdfExtractor,
    summarizer: &Summarizer<'_>,
) -> Result<Outcome, DocbriefError> {
    let span = tracing::info_span!(
        "summarize_upload",
        mime_type = %document.mime_type,
        bytes = document.bytes.len(),
        file_name = document.file_name.as_deref().unwrap_or("-"),
    );
    let _guard = span.enter();

    let extracted = match extraction::extract(document, pdf_extractor)? {
        Extraction::Text(text) => text,
        Extraction::Unsupported { mime_type } => {
            return Ok(Outcome::Unsupported { mime_type });
        }
    };

    if extracted.is_blank() {
        tracing::info!(units = extracted.units, "document has no extractable text");
        return Ok(Outcome::NoText);
    }

    let summary = summarizer.summarize(&extracted)?;
    Ok(Outcome::Summarized { summary })
}
