use crate::error::DocbriefError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolve a declared MIME type. Parameters after `;` are ignored and the
    /// comparison is ASCII case-insensitive.
    pub fn from_mime(mime_type: &str) -> Option<DocumentKind> {
        let essence = mime_type.split(';').next().unwrap_or("").trim();
        if essence.eq_ignore_ascii_case(PDF_MIME) {
            Some(DocumentKind::Pdf)
        } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
        }
    }
}

/// A file as received from the user: raw bytes plus the declared MIME type.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl UploadedDocument {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        UploadedDocument {
            bytes,
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_mime(&self.mime_type)
    }
}

/// Text pulled out of a document, pages or paragraphs joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub kind: DocumentKind,
    /// Number of pages (PDF) or paragraphs (DOCX) the text was built from.
    pub units: usize,
    pub text: String,
}

impl ExtractedText {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Result of running the extractor on an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Text(ExtractedText),
    /// The declared MIME type is not one the extractor handles.
    Unsupported { mime_type: String },
}

impl Extraction {
    /// The extracted text, or an error for the unsupported-type sentinel.
    pub fn into_text(self) -> Result<ExtractedText, DocbriefError> {
        match self {
            Extraction::Text(text) => Ok(text),
            Extraction::Unsupported { mime_type } => Err(DocbriefError::UnsupportedType { mime_type }),
        }
    }
}

/// Summary returned by the remote model, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryText(pub String);

impl SummaryText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lines as they become paragraphs in the output document.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }
}

impl fmt::Display for SummaryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What one pass of the pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Summarized { summary: SummaryText },
    Unsupported { mime_type: String },
    NoText,
}

impl Outcome {
    /// The summary, or the reason there is none as an error.
    pub fn into_summary(self) -> Result<SummaryText, DocbriefError> {
        match self {
            Outcome::Summarized { summary } => Ok(summary),
            Outcome::Unsupported { mime_type } => Err(DocbriefError::UnsupportedType { mime_type }),
            Outcome::NoText => Err(DocbriefError::NoText),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mime_recognizes_both_formats() {
        assert_eq!(DocumentKind::from_mime(PDF_MIME), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_mime(DOCX_MIME), Some(DocumentKind::Docx));
        for kind in [DocumentKind::Pdf, DocumentKind::Docx] {
            assert_eq!(DocumentKind::from_mime(kind.mime_type()), Some(kind));
        }
    }

    #[test]
    fn from_mime_ignores_parameters_and_case() {
        assert_eq!(
            DocumentKind::from_mime("Application/PDF; charset=binary"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn from_mime_rejects_other_types() {
        assert_eq!(DocumentKind::from_mime("text/plain"), None);
        assert_eq!(DocumentKind::from_mime("application/msword"), None);
        assert_eq!(DocumentKind::from_mime(""), None);
    }

    #[test]
    fn summary_lines_keep_blank_lines() {
        let summary = SummaryText("a\n\nb".into());
        assert_eq!(summary.lines().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(Outcome::NoText).unwrap();
        assert_eq!(json["status"], "no_text");
    }

    #[test]
    fn into_summary_maps_sentinels_to_errors() {
        let unsupported = Outcome::Unsupported {
            mime_type: "text/plain".into(),
        };
        assert!(matches!(
            unsupported.into_summary(),
            Err(DocbriefError::UnsupportedType { .. })
        ));
        assert!(matches!(
            Outcome::NoText.into_summary(),
            Err(DocbriefError::NoText)
        ));
    }
}
