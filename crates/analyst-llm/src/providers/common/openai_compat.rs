//! OpenAI-compatible request serialization helpers.
//!
//! Hosted completion APIs (Groq, OpenAI, and most gateways in front of them)
//! accept the same chat-completions request shape. These helpers build the
//! non-streaming "compat" JSON body and extract the first choice's content
//! from the response.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::provider::{CompletionOptions, LLMError, Result};
use crate::types::ChatMessage;

/// Build a standard OpenAI-compatible chat completion request body.
pub fn build_openai_compat_body(
    model: &str,
    messages: &[ChatMessage],
    options: &CompletionOptions,
) -> Value {
    let mut body = json!({
        "model": model,
        "messages": messages,
        "temperature": options.temperature,
    });

    if options.json_mode {
        body["response_format"] = json!({ "type": "json_object" });
    }

    body
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extract the generated text from a chat completion response body.
pub fn parse_openai_compat_response(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LLMError::Empty)
}
