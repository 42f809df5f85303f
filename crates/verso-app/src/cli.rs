use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::Parser;
use verso_config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = "verso",
    version,
    about = "Generate vocabulary for song lyrics using a language model",
    long_about = "Reads a JSON array of songs, extracts the unique words of each song's lyrics \
                  and asks an OpenAI-compatible model for a translation and explanation of \
                  every word. Songs that already have vocabulary are left untouched."
)]
pub struct Args {
    /// Input JSON file with songs
    pub input: PathBuf,

    /// Output JSON file (default: <input>-vocab.json next to the input)
    pub output: Option<PathBuf>,

    /// API key (or set OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model to use (default: gpt-4o-mini)
    #[arg(long)]
    pub model: Option<String>,

    /// Language of the lyrics (default: Spanish)
    #[arg(long)]
    pub language: Option<String>,

    /// Report progress every N words (default: 5)
    #[arg(long)]
    pub batch_size: Option<NonZeroUsize>,

    /// Base URL of an OpenAI-compatible API (or set OPENAI_BASE_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (default: 60)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => default_output_path(&self.input),
        }
    }

    /// Config file, then environment, then command line flags
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        self.resolve_config_with(|key| env::var(key).ok())
    }

    fn resolve_config_with<F>(&self, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        config.apply_env(lookup);
        self.apply_overrides(&mut config);

        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(api_key) = self.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            config.enricher.api_key = api_key.clone();
        }
        if let Some(api_url) = &self.api_url {
            config.enricher.api_url = api_url.clone();
        }
        if let Some(model) = &self.model {
            config.enricher.model = model.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.enricher.timeout_seconds = timeout;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
    }
}

/// `<stem>-vocab.json` in the input's directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("{stem}-vocab.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("verso").chain(args.iter().copied())).unwrap()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("songs.json")),
            PathBuf::from("songs-vocab.json")
        );
        assert_eq!(
            default_output_path(Path::new("/data/library/latin.json")),
            PathBuf::from("/data/library/latin-vocab.json")
        );
        assert_eq!(
            default_output_path(Path::new("lyrics/canciones")),
            PathBuf::from("lyrics/canciones-vocab.json")
        );
    }

    #[test]
    fn test_output_argument_wins() {
        let args = parse(&["songs.json", "out/result.json"]);
        assert_eq!(args.output_path(), PathBuf::from("out/result.json"));

        let args = parse(&["songs.json"]);
        assert_eq!(args.output_path(), PathBuf::from("songs-vocab.json"));
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = parse(&["songs.json"]).resolve_config_with(no_env).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_environment() {
        let args = parse(&[
            "songs.json",
            "--api-key",
            "sk-flag",
            "--model",
            "gpt-4o",
            "--language",
            "French",
            "--batch-size",
            "2",
        ]);

        let config = args
            .resolve_config_with(|key| match key {
                "OPENAI_API_KEY" => Some("sk-env".to_string()),
                "VERSO_LANGUAGE" => Some("Italian".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.enricher.api_key, "sk-flag");
        assert_eq!(config.enricher.model, "gpt-4o");
        assert_eq!(config.language, "French");
        assert_eq!(config.batch_size.get(), 2);
    }

    #[test]
    fn test_empty_api_key_flag_falls_back_to_environment() {
        let args = parse(&["songs.json", "--api-key", ""]);
        let config = args
            .resolve_config_with(|key| (key == "OPENAI_API_KEY").then(|| "sk-env".to_string()))
            .unwrap();
        assert_eq!(config.enricher.api_key, "sk-env");
    }

    #[test]
    fn test_config_file_is_the_base_layer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verso.json");
        fs::write(
            &path,
            r#"{"language": "German", "batch_size": 3, "enricher": {"api_key": "sk-file"}}"#,
        )
        .unwrap();

        let args = parse(&["songs.json", "--config", path.to_str().unwrap(), "--batch-size", "8"]);
        let config = args.resolve_config_with(no_env).unwrap();

        assert_eq!(config.language, "German");
        assert_eq!(config.enricher.api_key, "sk-file");
        assert_eq!(config.batch_size.get(), 8);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let result = Args::try_parse_from(["verso", "songs.json", "--batch-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["verso"]).is_err());
    }
}
