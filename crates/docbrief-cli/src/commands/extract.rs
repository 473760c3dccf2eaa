use docbrief_core::config::Settings;
use docbrief_core::extraction;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    mime: Option<String>,
    output_format: &str,
) -> Result<(), docbrief_core::error::DocbriefError> {
    let settings = Settings::from_env()?;
    let document = super::read_document(&input_file, mime)?;
    let extractor = settings.pdf_backend.extractor();

    let extracted = extraction::extract(&document, extractor.as_ref())?.into_text()?;

    match output_format {
        "json" => output::json::print(&extracted)?,
        _ => println!("{}", extracted.text),
    }

    eprintln!(
        "Extracted {} character(s) from {} {} unit(s)",
        extracted.char_count(),
        extracted.units,
        extracted.kind
    );

    Ok(())
}
