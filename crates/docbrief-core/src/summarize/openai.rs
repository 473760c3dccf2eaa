use super::{ChatRequest, ChatResponse, ChatTransport};
use crate::config::{ApiCredential, Settings};
use crate::error::DocbriefError;

/// Blocking client for an OpenAI-compatible chat-completion endpoint.
pub struct OpenAiTransport {
    base_url: String,
    credential: Option<ApiCredential>,
    client: reqwest::blocking::Client,
}

impl OpenAiTransport {
    pub fn new(settings: &Settings) -> Result<Self, DocbriefError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = settings.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| DocbriefError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: settings.api_base.trim_end_matches('/').to_string(),
            credential: settings.api_key.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl ChatTransport for OpenAiTransport {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, DocbriefError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(DocbriefError::MissingCredential)?;

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(credential.expose())
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    DocbriefError::Http(format!("cannot connect to {}", self.base_url))
                } else if e.is_timeout() {
                    DocbriefError::Http("request timed out".into())
                } else {
                    DocbriefError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "summarization API rejected request");
            return Err(DocbriefError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatResponse>()
            .map_err(|e| DocbriefError::Http(format!("unreadable response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::{ChatMessage, Role};

    fn request() -> ChatRequest {
        ChatRequest {
            model: "gpt-4".into(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: "hi".into(),
            }],
            temperature: 0.5,
            max_tokens: 10,
        }
    }

    #[test]
    fn endpoint_appends_chat_completions() {
        let settings = Settings {
            api_base: "http://localhost:1234/v1/".into(),
            ..Settings::default()
        };
        let transport = OpenAiTransport::new(&settings).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn missing_credential_fails_without_network() {
        let transport = OpenAiTransport::new(&Settings::default()).unwrap();
        assert!(matches!(
            transport.complete(&request()),
            Err(DocbriefError::MissingCredential)
        ));
    }

    #[test]
    fn response_body_parses_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Summary" }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 5, "completion_tokens": 1, "total_tokens": 6 }
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Summary");
    }

    #[test]
    fn unreachable_endpoint_is_http_error() {
        let settings = Settings {
            api_key: Some(ApiCredential::new("sk-test")),
            // Port 9 (discard) on localhost is closed in test environments
            api_base: "http://127.0.0.1:9/v1".into(),
            ..Settings::default()
        };
        let transport = OpenAiTransport::new(&settings).unwrap();
        assert!(matches!(
            transport.complete(&request()),
            Err(DocbriefError::Http(_))
        ));
    }
}
