use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    150
}

fn default_timeout_seconds() -> u64 {
    60
}

/// Settings for the text-generation service
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnricherConfig {
    #[serde(default)]
    pub api_key: String,
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on reply length
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl EnricherConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }
}
