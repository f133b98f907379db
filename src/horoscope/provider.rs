//! Outbound text-completion provider.
//!
//! `TextProvider` is the seam between the horoscope resolver and the network:
//! the resolver only sees "a prompt goes in, text or an error comes out".
//! `OpenRouterProvider` is the production implementation, speaking the
//! OpenRouter-compatible chat-completions wire format with a bounded timeout.
//! Tests substitute their own implementations to exercise both resolver paths.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;

/// Error type for provider operations.
///
/// Every variant is absorbed by the resolver's fallback path; none of them
/// ever reaches an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network failure or timeout before a response arrived.
    #[error("Provider unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the expected completion shape.
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// Trait for text-completion providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send a single-prompt completion request and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Production provider speaking the OpenRouter chat-completions API.
pub struct OpenRouterProvider {
    config: ProviderConfig,
    client: Client,
}

impl OpenRouterProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl TextProvider for OpenRouterProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: Some(self.config.max_tokens),
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending completion request to provider"
        );

        let mut builder = self.client.post(self.chat_url()).json(&request);

        if let Some(key) = self.config.api_key.as_deref() {
            builder = builder.bearer_auth(key);
        }
        // Attribution headers required by OpenRouter for app rankings
        if let Some(referer) = self.config.referer.as_deref() {
            builder = builder.header("HTTP-Referer", referer);
        }
        if let Some(title) = self.config.app_title.as_deref() {
            builder = builder.header("X-Title", title);
        }

        let response = builder.send().await.map_err(ProviderError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        first_choice_text(completion)
    }
}

/// Extract the first completion's message content from a parsed response.
///
/// An empty choice list counts as a malformed response, not a crash.
fn first_choice_text(completion: ChatResponse) -> Result<String, ProviderError> {
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::Malformed("response contained no choices".to_string()))
}

// ============================================================================
// Chat Completions Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Great day ahead!"}},{"message":{"content":"ignored"}}]}"#;
        let completion: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(first_choice_text(completion).unwrap(), "Great day ahead!");
    }

    #[test]
    fn empty_choices_is_malformed() {
        let completion: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            first_choice_text(completion),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn missing_choices_field_is_malformed() {
        let completion: ChatResponse = serde_json::from_str(r#"{"id":"gen-123"}"#).unwrap();
        assert!(matches!(
            first_choice_text(completion),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = ChatRequest {
            model: "openai/gpt-3.5-turbo",
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            max_tokens: Some(150),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "openai/gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
        assert_eq!(value["max_tokens"], 150);
    }

    #[test]
    fn chat_url_joins_base_without_double_slash() {
        let provider = OpenRouterProvider::new(ProviderConfig {
            base_url: "https://openrouter.ai/api/v1/".to_string(),
            ..ProviderConfig::default()
        });
        assert_eq!(
            provider.chat_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }
}
