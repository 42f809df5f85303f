use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::vocabulary::VocabularyEntry;

const TITLE_KEY: &str = "title";
const LINES_KEY: &str = "lines";
const VOCABULARY_KEY: &str = "vocabulary";

/// A song record from the collection.
///
/// Songs are kept as the raw JSON object they were read from, so fields
/// this tool does not know about (and their order) survive a round trip.
/// Only `title`, `lines` and `vocabulary` are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Song(Map<String, Value>);

/// What the song currently holds under `vocabulary`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabularyState {
    /// Absent, null, or an empty value (`[]`, `""`, `{}`, `false`, `0`)
    Missing,
    /// A non-empty list with this many entries
    Present(usize),
    /// Some other non-empty value; treated as present and never overwritten
    Opaque,
}

impl Song {
    /// Wrap a JSON value, returning `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get(TITLE_KEY).and_then(Value::as_str)
    }

    /// Title for progress output, falling back to the 1-based position
    pub fn display_title(&self, position: usize) -> String {
        match self.title() {
            Some(title) => title.to_string(),
            None => format!("Song {position}"),
        }
    }

    /// Lyric lines in order. Non-string elements are ignored.
    pub fn lines(&self) -> Vec<&str> {
        match self.0.get(LINES_KEY) {
            Some(Value::Array(lines)) => lines.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    pub fn vocabulary_state(&self) -> VocabularyState {
        match self.0.get(VOCABULARY_KEY) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => VocabularyState::Missing,
            Some(Value::Array(entries)) if entries.is_empty() => VocabularyState::Missing,
            Some(Value::Array(entries)) => VocabularyState::Present(entries.len()),
            Some(Value::String(text)) if text.is_empty() => VocabularyState::Missing,
            Some(Value::Object(fields)) if fields.is_empty() => VocabularyState::Missing,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => VocabularyState::Missing,
            Some(_) => VocabularyState::Opaque,
        }
    }

    /// Typed view of the vocabulary list, if it parses as one
    pub fn vocabulary(&self) -> Option<Vec<VocabularyEntry>> {
        let value = self.0.get(VOCABULARY_KEY)?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Attach a vocabulary list. An existing null/empty `vocabulary` key keeps
    /// its position; otherwise the key is appended after all other fields.
    pub fn set_vocabulary(&mut self, entries: Vec<VocabularyEntry>) {
        self.0.insert(VOCABULARY_KEY.to_string(), json!(entries));
    }
}
