//! Word document built from a summary.

use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use tempfile::NamedTempFile;

use crate::error::DocbriefError;
use crate::model::SummaryText;

pub const REPORT_HEADING: &str = "Company Summary";
pub const REPORT_FILE_NAME: &str = "company_summary.docx";
pub const HEADING_STYLE: &str = "Heading1";

/// Render the summary as DOCX bytes: one heading, then one paragraph per line.
pub fn render_docx(summary: &SummaryText) -> Result<Vec<u8>, DocbriefError> {
    let heading_style = Style::new(HEADING_STYLE, StyleType::Paragraph)
        .name("Heading 1")
        .bold()
        .size(32);

    let mut docx = Docx::new().add_style(heading_style).add_paragraph(
        Paragraph::new()
            .style(HEADING_STYLE)
            .add_run(Run::new().add_text(REPORT_HEADING)),
    );

    for line in summary.lines() {
        let mut paragraph = Paragraph::new();
        if !line.is_empty() {
            paragraph = paragraph.add_run(Run::new().add_text(line));
        }
        docx = docx.add_paragraph(paragraph);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocbriefError::Output(e.to_string()))?;
    Ok(buffer.into_inner())
}

/// A rendered summary document held in a temporary `.docx` file.
///
/// The file is removed when this value is dropped unless `persist` is called.
pub struct OutputDocument {
    file: NamedTempFile,
}

impl OutputDocument {
    /// Render the summary into a fresh, uniquely named temporary file.
    pub fn build(summary: &SummaryText) -> Result<Self, DocbriefError> {
        let bytes = render_docx(summary)?;
        let mut file = tempfile::Builder::new()
            .prefix("docbrief-")
            .suffix(".docx")
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;
        tracing::debug!(path = %file.path().display(), bytes = bytes.len(), "output document written");
        Ok(OutputDocument { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the document back from disk.
    pub fn bytes(&mut self) -> Result<Vec<u8>, DocbriefError> {
        let file = self.file.as_file_mut();
        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Move the document to `target`, keeping it after this value is gone.
    pub fn persist(self, target: &Path) -> Result<PathBuf, DocbriefError> {
        match self.file.persist(target) {
            Ok(_) => Ok(target.to_path_buf()),
            // Renames fail across filesystems; fall back to a copy.
            Err(e) => {
                std::fs::copy(e.file.path(), target)?;
                Ok(target.to_path_buf())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::docx::read_paragraphs;

    fn body_lines(bytes: &[u8]) -> Vec<String> {
        read_paragraphs(bytes)
            .unwrap()
            .into_iter()
            .skip(1)
            .map(|p| p.text)
            .collect()
    }

    #[test]
    fn heading_comes_first() {
        let bytes = render_docx(&SummaryText("Revenue grew 10%.".into())).unwrap();
        let paragraphs = read_paragraphs(&bytes).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text, REPORT_HEADING);
        assert_eq!(paragraphs[0].style.as_deref(), Some(HEADING_STYLE));
        assert_eq!(paragraphs[1].text, "Revenue grew 10%.");
    }

    #[test]
    fn lines_round_trip_including_blank_ones() {
        let summary = SummaryText("Overview\n\n  Indented line\nR&D <costs> rose\n".into());
        let bytes = render_docx(&summary).unwrap();
        assert_eq!(
            body_lines(&bytes),
            vec!["Overview", "", "  Indented line", "R&D <costs> rose", ""]
        );
    }

    #[test]
    fn temp_file_removed_on_drop() {
        let doc = OutputDocument::build(&SummaryText("x".into())).unwrap();
        let path = doc.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("docx"));
        drop(doc);
        assert!(!path.exists());
    }

    #[test]
    fn bytes_read_back_match_rendering() {
        let summary = SummaryText("one\ntwo".into());
        let mut doc = OutputDocument::build(&summary).unwrap();
        let bytes = doc.bytes().unwrap();
        assert_eq!(body_lines(&bytes), vec!["one", "two"]);
    }

    #[test]
    fn persist_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join(REPORT_FILE_NAME);
        let doc = OutputDocument::build(&SummaryText("kept".into())).unwrap();
        let path = doc.persist(&target).unwrap();
        assert!(path.exists());
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(body_lines(&bytes), vec!["kept"]);
    }
}
