use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocbriefError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("Unsupported file type: {mime_type}")]
    UnsupportedType { mime_type: String },

    #[error("no text could be extracted from the document")]
    NoText,

    #[error("failed to read DOCX: {0}")]
    Docx(String),

    #[error("no API credential configured. Set OPENAI_API_KEY")]
    MissingCredential,

    #[error("request to summarization API failed: {0}")]
    Http(String),

    #[error("summarization API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("summarization API returned no completion choices")]
    EmptyCompletion,

    #[error("document text is {chars} characters, above the profile limit of {limit}")]
    InputTooLarge { chars: usize, limit: usize },

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("failed to build output document: {0}")]
    Output(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
