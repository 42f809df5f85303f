use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use verso_config::EnricherConfig;
use verso_types::WordGloss;

use crate::prompt::build_prompt;
use crate::reply::parse_reply;
use crate::{EnrichError, Enricher, ProviderMetadata};

/// Enricher backed by an OpenAI-compatible chat completions endpoint
#[derive(Clone)]
pub struct OpenAiEnricher {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiEnricher {
    pub fn new(config: &EnricherConfig) -> Result<Self, EnrichError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.chat_completions_url(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, EnrichError> {
        let request = ChatRequest {
            model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == 429 {
            return Err(EnrichError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(EnrichError::Authentication);
        }

        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_default();
            return Err(EnrichError::Api(if detail.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {detail}")
            }));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| EnrichError::Api(format!("Failed to parse response: {e}")))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| EnrichError::Api("No completion in response".to_string()))
    }
}

#[async_trait]
impl Enricher for OpenAiEnricher {
    async fn enrich(
        &self,
        word: &str,
        language: &str,
        model: &str,
    ) -> Result<WordGloss, EnrichError> {
        if self.api_key.trim().is_empty() {
            return Err(EnrichError::Authentication);
        }

        let prompt = build_prompt(word, language);
        let content = self.complete(model, &prompt).await?;
        tracing::debug!("reply for '{word}': {content}");

        parse_reply(&content)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            requires_api_key: true,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}
