pub mod openai;

use serde::{Deserialize, Serialize};

use crate::error::DocbriefError;
use crate::model::{ExtractedText, SummaryText};
use crate::profile::schema::{OversizePolicy, SummaryProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Body of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The parts of a chat-completion response we read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Sends one chat-completion request and returns the parsed response.
pub trait ChatTransport: Send + Sync {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, DocbriefError>;
}

/// Turns extracted text into a summary using a profile and a transport.
pub struct Summarizer<'a> {
    profile: &'a SummaryProfile,
    transport: &'a dyn ChatTransport,
}

impl<'a> Summarizer<'a> {
    pub fn new(profile: &'a SummaryProfile, transport: &'a dyn ChatTransport) -> Self {
        Self { profile, transport }
    }

    pub fn profile(&self) -> &SummaryProfile {
        self.profile
    }

    /// Build the request for a document: one system message, one user message.
    pub fn build_request(&self, document_text: &str) -> Result<ChatRequest, DocbriefError> {
        let text = apply_oversize_policy(document_text, self.profile.oversize)?;
        Ok(ChatRequest {
            model: self.profile.model.clone(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: self.profile.system_prompt.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: self.profile.user_message(text),
                },
            ],
            temperature: self.profile.temperature,
            max_tokens: self.profile.max_tokens,
        })
    }

    /// Summarize extracted text. Errors from the transport propagate untouched.
    pub fn summarize(&self, extracted: &ExtractedText) -> Result<SummaryText, DocbriefError> {
        let request = self.build_request(&extracted.text)?;
        tracing::info!(
            model = %request.model,
            input_chars = extracted.char_count(),
            max_tokens = request.max_tokens,
            "requesting summary"
        );

        let response = self.transport.complete(&request)?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(DocbriefError::EmptyCompletion)?;

        tracing::info!(
            summary_chars = choice.message.content.chars().count(),
            "summary received"
        );
        Ok(SummaryText(choice.message.content))
    }
}

/// Apply the profile's policy for long inputs.
pub fn apply_oversize_policy(text: &str, policy: OversizePolicy) -> Result<&str, DocbriefError> {
    match policy {
        OversizePolicy::SendAll => Ok(text),
        OversizePolicy::Reject { max_chars } => {
            let chars = text.chars().count();
            if chars > max_chars {
                Err(DocbriefError::InputTooLarge {
                    chars,
                    limit: max_chars,
                })
            } else {
                Ok(text)
            }
        }
        OversizePolicy::Truncate { max_chars } => match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => {
                tracing::warn!(max_chars, "document text truncated before summarizing");
                Ok(&text[..byte_index])
            }
            None => Ok(text),
        },
    }
}
