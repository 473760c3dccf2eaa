use crate::error::DocbriefError;
use crate::extraction::{PageContent, PdfExtractor};
use lopdf::Document;

/// In-process PDF extraction backend built on lopdf.
///
/// Needs no system tools, which makes it the default backend.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, DocbriefError> {
        let doc = Document::load_mem(pdf_bytes)
            .map_err(|e| DocbriefError::Extraction(format!("failed to open PDF: {e}")))?;

        // get_pages() is keyed by page number, so iteration follows page order
        let mut pages = Vec::new();
        for (index, page_number) in doc.get_pages().into_keys().enumerate() {
            let text = doc.extract_text(&[page_number]).map_err(|e| {
                DocbriefError::Extraction(format!("page {page_number}: {e}"))
            })?;
            pages.push(PageContent {
                page_number: index + 1,
                text: text.trim_end().to_string(),
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}
