pub mod provider;
pub mod provider_factory;
pub mod providers;
pub mod types;

pub use provider::{CompletionOptions, CompletionProvider, LLMError};
pub use provider_factory::{create_provider, validate_provider_config, AVAILABLE_PROVIDERS};
pub use providers::{GroqProvider, OllamaProvider};
pub use types::{ChatMessage, Role};
