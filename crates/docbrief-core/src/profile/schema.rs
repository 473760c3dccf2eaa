use serde::{Deserialize, Serialize};

/// Prompt pair and request parameters used for one kind of summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Chat model identifier sent with every request.
    pub model: String,
    pub system_prompt: String,
    /// Analytic instruction; the document text is appended after a blank line.
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(default)]
    pub oversize: OversizePolicy,
}

impl SummaryProfile {
    /// Build the user message for a document.
    pub fn user_message(&self, document_text: &str) -> String {
        format!("{}\n\n{}", self.user_prompt, document_text)
    }
}

/// What to do with document text longer than the remote model may accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OversizePolicy {
    /// Send the whole text in one request, whatever its length.
    #[default]
    SendAll,
    /// Fail before calling the API when the text exceeds `max_chars`.
    Reject { max_chars: usize },
    /// Keep only the first `max_chars` characters.
    Truncate { max_chars: usize },
}
