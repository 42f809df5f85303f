mod openai;
mod prompt;
mod reply;

pub use openai::OpenAiEnricher;
pub use prompt::build_prompt;
pub use reply::{parse_reply, strip_code_fence};

use verso_types::WordGloss;

/// Word enrichment provider interface
#[async_trait::async_trait]
pub trait Enricher: Send + Sync {
    /// Ask the model `model` for a translation and explanation of `word`,
    /// a word in `language`
    async fn enrich(
        &self,
        word: &str,
        language: &str,
        model: &str,
    ) -> Result<WordGloss, EnrichError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

/// Coarse classification of a per-word failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The reply arrived but was not the expected JSON object
    WordParseFailure,
    /// The service could not be reached or refused the request
    WordApiFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Malformed reply: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    Authentication,
}

impl EnrichError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EnrichError::Parse(_) => FailureKind::WordParseFailure,
            _ => FailureKind::WordApiFailure,
        }
    }
}
