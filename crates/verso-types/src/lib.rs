mod song;
mod vocabulary;

pub use song::{Song, VocabularyState};
pub use vocabulary::{VocabularyEntry, WordGloss};
