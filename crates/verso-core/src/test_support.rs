use std::collections::HashMap;
use std::sync::Mutex;

use verso_translator::{EnrichError, Enricher, ProviderMetadata, parse_reply};
use verso_types::WordGloss;

/// Scripted behaviour for one word
pub enum Reply {
    /// Raw model text, run through the real reply parser
    Text(&'static str),
    /// Service-side failure
    ApiError,
}

/// Enricher that answers from a script and records every call.
///
/// Words without a script entry succeed with a generated gloss.
pub struct StubEnricher {
    script: HashMap<String, Reply>,
    calls: Mutex<Vec<(String, String, String)>>,
    requires_api_key: bool,
}

impl StubEnricher {
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            requires_api_key: true,
        }
    }

    /// Report that no credential is needed
    pub fn keyless(mut self) -> Self {
        self.requires_api_key = false;
        self
    }

    pub fn reply(mut self, word: &str, reply: Reply) -> Self {
        self.script.insert(word.to_string(), reply);
        self
    }

    /// Words requested so far, in call order
    pub fn words(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(word, _, _)| word.clone())
            .collect()
    }

    /// Full `(word, language, model)` tuples requested so far
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Enricher for StubEnricher {
    async fn enrich(
        &self,
        word: &str,
        language: &str,
        model: &str,
    ) -> Result<WordGloss, EnrichError> {
        self.calls.lock().unwrap().push((
            word.to_string(),
            language.to_string(),
            model.to_string(),
        ));

        match self.script.get(word) {
            Some(Reply::Text(text)) => parse_reply(text),
            Some(Reply::ApiError) => Err(EnrichError::Api("HTTP 500".to_string())),
            None => Ok(WordGloss {
                translation: format!("{word} (en)"),
                explanation: format!("Stub explanation of {word}."),
            }),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            requires_api_key: self.requires_api_key,
        }
    }
}
