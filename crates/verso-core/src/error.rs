use std::io;
use std::path::PathBuf;

/// Failures that abort a whole run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead { path: PathBuf, source: io::Error },

    #[error("Invalid JSON in input file: {0}")]
    InputMalformed(#[source] serde_json::Error),

    #[error("Input file must contain a JSON array of songs ({0})")]
    InputShapeInvalid(String),

    #[error("No API key provided. Set OPENAI_API_KEY environment variable or use --api-key")]
    MissingCredential,

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWriteError { path: PathBuf, source: io::Error },
}
