pub mod collection;
pub mod error;
pub mod pipeline;
pub mod tokenizer;

#[cfg(test)]
mod test_support;

pub use error::RunError;
pub use pipeline::{RunSummary, SongOutcome, process_song, run};
pub use tokenizer::extract_unique_words;
