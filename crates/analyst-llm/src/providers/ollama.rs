use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::provider::{CompletionOptions, CompletionProvider, LLMError, Result};
use crate::types::ChatMessage;

/// Local backend talking to an Ollama server on the network.
///
/// Unlike the hosted API, Ollama exposes the decoding knobs directly, so the
/// `num_ctx`/`num_predict`/`top_p` hints are forwarded into its `options`
/// object together with the configured thread count.
pub struct OllamaProvider {
    client: Client,
    host: String,
    model: String,
    num_thread: Option<u32>,
}

impl Default for OllamaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaProvider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            host: "http://127.0.0.1:11434".to_string(),
            model: "llama3.2:latest".to_string(),
            num_thread: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_num_thread(mut self, num_thread: u32) -> Self {
        self.num_thread = Some(num_thread);
        self
    }

    fn build_body(&self, messages: &[ChatMessage], options: &CompletionOptions) -> serde_json::Value {
        let mut decoding = json!({ "temperature": options.temperature });
        if let Some(num_ctx) = options.num_ctx {
            decoding["num_ctx"] = json!(num_ctx);
        }
        if let Some(num_predict) = options.num_predict {
            decoding["num_predict"] = json!(num_predict);
        }
        if let Some(top_p) = options.top_p {
            decoding["top_p"] = json!(top_p);
        }
        if let Some(num_thread) = self.num_thread {
            decoding["num_thread"] = json!(num_thread);
        }

        let mut body = json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "options": decoding,
        });

        if options.json_mode {
            body["format"] = json!("json");
        }

        body
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String> {
        let body = self.build_body(messages, options);

        log::debug!("Ollama completion request to {} (model: {})", self.host, self.model);

        let response = self
            .client
            .post(format!("{}/api/chat", self.host))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(LLMError::Api(format!("HTTP {}: {}", status, text)));
        }

        let value: serde_json::Value = response.json().await?;
        value
            .pointer("/message/content")
            .and_then(|content| content.as_str())
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .ok_or(LLMError::Empty)
    }
}
