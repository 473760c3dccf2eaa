pub mod extract;
pub mod profile;
pub mod serve;
pub mod summarize;

use docbrief_core::error::DocbriefError;
use docbrief_core::model::UploadedDocument;
use docbrief_core::profile::builtin;
use docbrief_core::profile::schema::SummaryProfile;
use std::path::{Path, PathBuf};

/// Load a custom profile, or the built-in one when no file is given.
pub fn resolve_profile(path: Option<PathBuf>) -> Result<SummaryProfile, DocbriefError> {
    match path {
        Some(p) => docbrief_core::profile::load_profile(&p),
        None => builtin::default_profile(),
    }
}

/// Read a local file as an upload. The MIME type is guessed from the
/// extension unless given explicitly.
pub fn read_document(path: &Path, mime: Option<String>) -> Result<UploadedDocument, DocbriefError> {
    let bytes = std::fs::read(path)?;
    let mime_type = mime.unwrap_or_else(|| {
        mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string()
    });
    let mut document = UploadedDocument::new(bytes, mime_type);
    if let Some(name) = path.file_name() {
        document = document.with_file_name(name.to_string_lossy());
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docbrief_core::model::{DocumentKind, DOCX_MIME};

    #[test]
    fn read_document_guesses_docx_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annual.docx");
        std::fs::write(&path, b"PK").unwrap();
        let doc = read_document(&path, None).unwrap();
        assert_eq!(doc.mime_type, DOCX_MIME);
        assert_eq!(doc.kind(), Some(DocumentKind::Docx));
        assert_eq!(doc.file_name.as_deref(), Some("annual.docx"));
    }

    #[test]
    fn explicit_mime_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.bin");
        std::fs::write(&path, b"%PDF").unwrap();
        let doc = read_document(&path, Some("application/pdf".into())).unwrap();
        assert_eq!(doc.kind(), Some(DocumentKind::Pdf));
    }

    #[test]
    fn default_profile_when_no_file() {
        let profile = resolve_profile(None).unwrap();
        assert_eq!(profile.model, "gpt-4");
    }
}
