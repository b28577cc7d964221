use async_trait::async_trait;
use reqwest::Client;

use crate::provider::{CompletionOptions, CompletionProvider, LLMError, Result};
use crate::types::ChatMessage;

use super::common::openai_compat::{build_openai_compat_body, parse_openai_compat_response};

/// Hosted backend speaking the OpenAI-compatible chat completions API.
///
/// The context/length hints in [`CompletionOptions`] have no counterpart in
/// this API and are ignored.
pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String> {
        let body = build_openai_compat_body(&self.model, messages, options);

        log::debug!(
            "Groq completion request to {} (model: {})",
            self.base_url,
            self.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(LLMError::Api(format!("HTTP {}: {}", status, text)));
        }

        let text = response.text().await?;
        parse_openai_compat_response(&text)
    }
}
