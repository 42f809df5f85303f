use std::env;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::enricher::EnricherConfig;

pub mod enricher;

const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(5) {
    Some(n) => n,
    None => unreachable!(),
};

fn default_language() -> String {
    "Spanish".to_string()
}

fn default_batch_size() -> NonZeroUsize {
    DEFAULT_BATCH_SIZE
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub enricher: EnricherConfig,
    /// Source language of the lyrics
    #[serde(default = "default_language")]
    pub language: String,
    /// Progress is reported every `batch_size` enriched words
    #[serde(default = "default_batch_size")]
    pub batch_size: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enricher: EnricherConfig::default(),
            language: default_language(),
            batch_size: default_batch_size(),
        }
    }
}

impl Config {
    /// Defaults with process environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from environment variables.
    ///
    /// Unset, empty or unparsable values leave the current field alone.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = var("OPENAI_API_KEY") {
            self.enricher.api_key = api_key;
        }

        if let Some(api_url) = var("OPENAI_BASE_URL") {
            self.enricher.api_url = api_url;
        }

        if let Some(model) = var("VERSO_MODEL") {
            self.enricher.model = model;
        }

        if let Some(timeout) = var("VERSO_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.enricher.timeout_seconds = timeout;
        }

        if let Some(language) = var("VERSO_LANGUAGE") {
            self.language = language;
        }

        if let Some(batch_size) = var("VERSO_BATCH_SIZE").and_then(|v| v.parse().ok()) {
            self.batch_size = batch_size;
        }
    }
}
