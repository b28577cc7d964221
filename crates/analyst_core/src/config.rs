use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Which completion backend to use: "groq" or "ollama".
    pub provider: String,
    #[serde(default)]
    pub providers: ProviderConfigs,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfigs {
    #[serde(default)]
    pub groq: Option<GroqConfig>,
    #[serde(default)]
    pub ollama: Option<OllamaConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub num_thread: Option<u32>,
}

fn analyst_config_json_path() -> PathBuf {
    if let Some(path) = std::env::var_os("ANALYST_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".rnc-analyst")
        .join("config.json")
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Build the configuration from the optional JSON config file, then
    /// apply environment-variable overrides on top.
    pub fn new() -> Self {
        let mut config = Config {
            provider: "groq".to_string(),
            providers: ProviderConfigs::default(),
        };

        let json_path = analyst_config_json_path();
        if json_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&json_path) {
                if let Ok(file_config) = serde_json::from_str::<Config>(&content) {
                    config = file_config;
                }
            }
        }

        if let Ok(provider) = std::env::var("ANALYST_PROVIDER") {
            config.provider = provider;
        }
        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            let groq = config.providers.groq.get_or_insert(GroqConfig {
                api_key: String::new(),
                base_url: None,
                model: None,
            });
            groq.api_key = api_key;
        }
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            if let Some(groq) = config.providers.groq.as_mut() {
                groq.base_url = Some(base_url);
            }
        }
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            if let Some(groq) = config.providers.groq.as_mut() {
                groq.model = Some(model);
            }
        }
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            config.providers.ollama.get_or_insert_with(OllamaConfig::default).host = Some(host);
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config.providers.ollama.get_or_insert_with(OllamaConfig::default).model = Some(model);
        }
        if let Ok(num_thread) = std::env::var("OLLAMA_NUM_THREAD") {
            if let Ok(n) = num_thread.trim().parse::<u32>() {
                config
                    .providers
                    .ollama
                    .get_or_insert_with(OllamaConfig::default)
                    .num_thread = Some(n);
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_shape_parses() {
        let content = r#"{
            "provider": "ollama",
            "providers": {
                "ollama": { "host": "http://10.0.3.2:11434", "model": "qwen2.5:7b", "num_thread": 8 }
            }
        }"#;

        let config: Config = serde_json::from_str(content).unwrap();

        assert_eq!(config.provider, "ollama");
        let ollama = config.providers.ollama.unwrap();
        assert_eq!(ollama.host.as_deref(), Some("http://10.0.3.2:11434"));
        assert_eq!(ollama.num_thread, Some(8));
        assert!(config.providers.groq.is_none());
    }

    #[test]
    fn provider_sections_are_optional() {
        let config: Config = serde_json::from_str(r#"{ "provider": "groq" }"#).unwrap();

        assert_eq!(config.provider, "groq");
        assert!(config.providers.groq.is_none());
        assert!(config.providers.ollama.is_none());
    }

    #[test]
    fn groq_optional_fields_default_to_none() {
        let config: Config = serde_json::from_str(
            r#"{ "provider": "groq", "providers": { "groq": { "api_key": "gsk-test" } } }"#,
        )
        .unwrap();

        let groq = config.providers.groq.unwrap();
        assert_eq!(groq.api_key, "gsk-test");
        assert!(groq.base_url.is_none());
        assert!(groq.model.is_none());
    }
}
