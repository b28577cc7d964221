use std::sync::Arc;

use analyst_core::{AnalysisRequest, AnalysisResult, NonconformanceRecord};
use analyst_llm::{ChatMessage, CompletionOptions, CompletionProvider, LLMError};
use thiserror::Error;

use super::prompt_builder::{build_user_prompt, SYSTEM_PROMPT};

/// Minimum context window requested from backends that honor the hint.
const MIN_CONTEXT_WINDOW: u32 = 2048;
/// Additional context tokens budgeted per record.
const CONTEXT_PER_RECORD: u32 = 150;
/// Cap on the generated response length.
const MAX_RESPONSE_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("completion backend error: {0}")]
    Completion(#[from] LLMError),

    #[error("failed to serialize records for the prompt: {0}")]
    PromptSerialization(#[source] serde_json::Error),

    #[error("invalid completion response: {0}")]
    InvalidResponse(String),
}

/// Orchestrates one analysis request: normalize, short-circuit on empty
/// input, render the prompt, call the backend, validate its answer.
pub struct AnalysisService {
    provider: Arc<dyn CompletionProvider>,
}

fn context_window_for(record_count: usize) -> u32 {
    MIN_CONTEXT_WINDOW.max(record_count as u32 * CONTEXT_PER_RECORD)
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let records: Vec<NonconformanceRecord> = request.trimmed();

        // Guard against asking the backend to analyze nothing.
        if records.is_empty() {
            log::info!("no records in batch; returning stable baseline without backend call");
            return Ok(AnalysisResult::stable_baseline());
        }

        let total = records.len();
        log::info!("analyzing batch of {} records", total);

        let user_prompt =
            build_user_prompt(&records).map_err(AnalysisError::PromptSerialization)?;
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user_prompt)];

        let options = CompletionOptions {
            temperature: 0.2,
            json_mode: true,
            num_ctx: Some(context_window_for(total)),
            num_predict: Some(MAX_RESPONSE_TOKENS),
            top_p: None,
        };

        let text = self.provider.complete(&messages, &options).await?;

        let result: AnalysisResult = serde_json::from_str(&text).map_err(|e| {
            AnalysisError::InvalidResponse(format!("backend returned unparseable analysis: {e}"))
        })?;

        // The prompt pins this number; a divergent backend answer is unusable.
        if result.statistics.total_analyzed != total as u64 {
            return Err(AnalysisError::InvalidResponse(format!(
                "backend reported total_analisado = {}, expected {}",
                result.statistics.total_analyzed, total
            )));
        }

        Ok(result)
    }
}
