use docbrief_core::config::Settings;
use docbrief_core::report::OutputDocument;
use docbrief_core::summarize::openai::OpenAiTransport;
use docbrief_core::summarize::Summarizer;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_file: PathBuf,
    out: &Path,
    profile_file: Option<PathBuf>,
    mime: Option<String>,
    output_format: &str,
) -> Result<(), docbrief_core::error::DocbriefError> {
    let settings = Settings::from_env()?;
    let profile = super::resolve_profile(profile_file)?;
    let document = super::read_document(&input_file, mime)?;

    let transport = OpenAiTransport::new(&settings)?;
    let summarizer = Summarizer::new(&profile, &transport);
    let extractor = settings.pdf_backend.extractor();

    let outcome = docbrief_core::summarize_upload(&document, extractor.as_ref(), &summarizer)?;

    if output_format == "json" {
        output::json::print(&outcome)?;
    }

    let summary = outcome.into_summary()?;
    let saved = OutputDocument::build(&summary)?.persist(out)?;

    if output_format != "json" {
        println!("{}", output::text::format_summary(&summary));
    }
    eprintln!("Summary written to {}", saved.display());

    Ok(())
}
