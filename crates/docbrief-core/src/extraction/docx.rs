//! Paragraph reader for Office Open XML word-processing documents.
//!
//! Only the main document part is read. Paragraphs nested in tables, text
//! boxes and other containers are skipped, as are headers and footers, which
//! live in separate parts.

use std::io::{Cursor, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::DocbriefError;

const DOCUMENT_PART: &str = "word/document.xml";

/// One body paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph style id (`w:pStyle`), e.g. "Heading1".
    pub style: Option<String>,
    pub text: String,
}

/// Read the top-level body paragraphs of a DOCX file, in document order.
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<Paragraph>, DocbriefError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocbriefError::Docx(format!("not a DOCX container: {e}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DocbriefError::Docx(format!("{DOCUMENT_PART} missing: {e}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| DocbriefError::Docx(format!("{DOCUMENT_PART} unreadable: {e}")))?;

    parse_document_xml(&xml)
}

/// Join paragraph texts with `\n`.
pub fn join_paragraphs(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_document_xml(xml: &str) -> Result<Vec<Paragraph>, DocbriefError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();

    // Depth of containers whose paragraphs are not body paragraphs.
    let mut nested = 0usize;
    let mut in_body = false;
    let mut in_run = false;
    let mut in_text = false;
    let mut current: Option<Paragraph> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DocbriefError::Docx(format!("malformed XML: {e}")))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"body" => in_body = true,
                b"tbl" | b"txbxContent" | b"footnote" | b"comment" => nested += 1,
                b"p" if in_body && nested == 0 && current.is_none() => {
                    current = Some(Paragraph {
                        style: None,
                        text: String::new(),
                    });
                }
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if in_body && nested == 0 && current.is_none() => {
                    paragraphs.push(Paragraph {
                        style: None,
                        text: String::new(),
                    });
                }
                b"pStyle" => {
                    if let Some(p) = current.as_mut() {
                        p.style = attribute_value(&e, b"val");
                    }
                }
                b"tab" if in_run => push_text(&mut current, "\t"),
                b"br" | b"cr" if in_run => push_text(&mut current, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| DocbriefError::Docx(format!("bad text node: {e}")))?;
                push_text(&mut current, &text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"body" => in_body = false,
                b"tbl" | b"txbxContent" | b"footnote" | b"comment" => {
                    nested = nested.saturating_sub(1)
                }
                b"p" if nested == 0 => {
                    if let Some(p) = current.take() {
                        paragraphs.push(p);
                    }
                }
                b"r" => in_run = false,
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(current: &mut Option<Paragraph>, text: &str) {
    if let Some(p) = current.as_mut() {
        p.text.push_str(text);
    }
}

fn attribute_value(element: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == local)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}
