use crate::types::ChatMessage;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("empty completion: provider returned no content")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// Decoding parameters for a single completion request.
///
/// `num_ctx`, `num_predict` and `top_p` are hints; backends whose API does
/// not expose them silently ignore them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub temperature: f32,
    /// Ask the backend for pure-JSON output (best-effort instruction).
    pub json_mode: bool,
    /// Context-window size hint, scaled by the caller per request.
    pub num_ctx: Option<u32>,
    /// Cap on the generated response length.
    pub num_predict: Option<u32>,
    pub top_p: Option<f32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            json_mode: false,
            num_ctx: None,
            num_predict: None,
            top_p: None,
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Request one text completion for the given messages.
    ///
    /// Returns the raw generated text. Callers are responsible for any
    /// parsing of that text; the `json_mode` option is an instruction to
    /// the backend, not a guarantee.
    async fn complete(&self, messages: &[ChatMessage], options: &CompletionOptions)
        -> Result<String>;
}
