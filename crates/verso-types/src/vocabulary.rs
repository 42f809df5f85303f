use serde::{Deserialize, Serialize};

/// Translation and explanation returned for a single word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGloss {
    pub translation: String,
    pub explanation: String,
}

/// One entry of a song's `vocabulary` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// Lowercased, punctuation-stripped token the entry was generated for
    pub word: String,
    pub translation: String,
    pub explanation: String,
}

impl VocabularyEntry {
    pub fn new(word: impl Into<String>, gloss: WordGloss) -> Self {
        Self {
            word: word.into(),
            translation: gloss.translation,
            explanation: gloss.explanation,
        }
    }
}
