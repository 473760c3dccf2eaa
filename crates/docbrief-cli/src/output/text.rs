use docbrief_core::model::SummaryText;
use docbrief_core::report::REPORT_HEADING;

/// Terminal rendering of a summary: underlined heading, then the text.
pub fn format_summary(summary: &SummaryText) -> String {
    format!(
        "{}\n{}\n\n{}",
        REPORT_HEADING,
        "=".repeat(REPORT_HEADING.chars().count()),
        summary.as_str().trim_end()
    )
}
