//! Provider Factory
//!
//! Creates completion providers based on configuration.

use crate::provider::{CompletionProvider, LLMError};
use crate::providers::{GroqProvider, OllamaProvider};
use analyst_core::Config;
use std::sync::Arc;

/// Available provider types
pub const AVAILABLE_PROVIDERS: &[&str] = &["groq", "ollama"];

/// Create a provider based on the current configuration.
///
/// Intended to run once at process start; the returned handle is shared
/// across requests.
pub fn create_provider(config: &Config) -> Result<Arc<dyn CompletionProvider>, LLMError> {
    match config.provider.as_str() {
        "groq" => {
            let groq_config = config
                .providers
                .groq
                .as_ref()
                .ok_or_else(|| LLMError::Auth("Groq configuration required".to_string()))?;

            if groq_config.api_key.is_empty() {
                return Err(LLMError::Auth("Groq API key is required".to_string()));
            }

            let mut provider = GroqProvider::new(&groq_config.api_key);

            if let Some(base_url) = &groq_config.base_url {
                if !base_url.is_empty() {
                    provider = provider.with_base_url(base_url);
                }
            }

            if let Some(model) = &groq_config.model {
                if !model.is_empty() {
                    provider = provider.with_model(model);
                }
            }

            Ok(Arc::new(provider))
        }

        "ollama" => {
            let ollama_config = config.providers.ollama.clone().unwrap_or_default();

            let mut provider = OllamaProvider::new();

            if let Some(host) = &ollama_config.host {
                if !host.is_empty() {
                    provider = provider.with_host(host);
                }
            }

            if let Some(model) = &ollama_config.model {
                if !model.is_empty() {
                    provider = provider.with_model(model);
                }
            }

            if let Some(num_thread) = ollama_config.num_thread {
                provider = provider.with_num_thread(num_thread);
            }

            Ok(Arc::new(provider))
        }

        _ => Err(LLMError::Auth(format!(
            "Unknown provider: {}. Available providers: {}",
            config.provider,
            AVAILABLE_PROVIDERS.join(", ")
        ))),
    }
}

/// Validate provider configuration without creating the provider
pub fn validate_provider_config(config: &Config) -> Result<(), LLMError> {
    match config.provider.as_str() {
        "groq" => {
            let groq_config = config
                .providers
                .groq
                .as_ref()
                .ok_or_else(|| LLMError::Auth("Groq configuration required".to_string()))?;

            if groq_config.api_key.is_empty() {
                return Err(LLMError::Auth("Groq API key is required".to_string()));
            }

            Ok(())
        }

        // The local backend has usable defaults for every setting.
        "ollama" => Ok(()),

        _ => Err(LLMError::Auth(format!(
            "Unknown provider: {}",
            config.provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyst_core::{GroqConfig, OllamaConfig, ProviderConfigs};

    #[test]
    fn create_groq_provider_without_config_fails() {
        let config = Config {
            provider: "groq".to_string(),
            providers: ProviderConfigs::default(),
        };

        let result = create_provider(&config);

        match result {
            Err(LLMError::Auth(msg)) => {
                assert!(msg.contains("Groq configuration required"));
            }
            _ => panic!("Expected Auth error"),
        }
    }

    #[test]
    fn create_groq_provider_with_empty_key_fails() {
        let config = Config {
            provider: "groq".to_string(),
            providers: ProviderConfigs {
                groq: Some(GroqConfig {
                    api_key: "".to_string(),
                    base_url: None,
                    model: None,
                }),
                ollama: None,
            },
        };

        let result = create_provider(&config);

        match result {
            Err(LLMError::Auth(msg)) => {
                assert!(msg.contains("API key is required"));
            }
            _ => panic!("Expected Auth error"),
        }
    }

    #[test]
    fn create_groq_provider_success() {
        let config = Config {
            provider: "groq".to_string(),
            providers: ProviderConfigs {
                groq: Some(GroqConfig {
                    api_key: "gsk-test123".to_string(),
                    base_url: Some("http://localhost:9999/v1".to_string()),
                    model: Some("llama-3.1-8b-instant".to_string()),
                }),
                ollama: None,
            },
        };

        assert!(create_provider(&config).is_ok());
    }

    #[test]
    fn create_ollama_provider_works_without_config() {
        let config = Config {
            provider: "ollama".to_string(),
            providers: ProviderConfigs::default(),
        };

        assert!(create_provider(&config).is_ok());
    }

    #[test]
    fn create_ollama_provider_with_config() {
        let config = Config {
            provider: "ollama".to_string(),
            providers: ProviderConfigs {
                groq: None,
                ollama: Some(OllamaConfig {
                    host: Some("http://10.0.3.2:11434".to_string()),
                    model: Some("qwen2.5:7b".to_string()),
                    num_thread: Some(8),
                }),
            },
        };

        assert!(create_provider(&config).is_ok());
    }

    #[test]
    fn create_unknown_provider_fails() {
        let config = Config {
            provider: "unknown".to_string(),
            providers: ProviderConfigs::default(),
        };

        let result = create_provider(&config);

        match result {
            Err(LLMError::Auth(msg)) => {
                assert!(msg.contains("Unknown provider"));
                assert!(msg.contains("groq, ollama"));
            }
            _ => panic!("Expected Auth error"),
        }
    }

    #[test]
    fn validate_groq_config_missing() {
        let config = Config {
            provider: "groq".to_string(),
            providers: ProviderConfigs::default(),
        };

        assert!(validate_provider_config(&config).is_err());
    }

    #[test]
    fn validate_ollama_config_is_always_ok() {
        let config = Config {
            provider: "ollama".to_string(),
            providers: ProviderConfigs::default(),
        };

        assert!(validate_provider_config(&config).is_ok());
    }
}
