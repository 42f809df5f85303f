use std::fmt;
use std::path::Path;

use tracing::{info, warn};
use verso_config::Config;
use verso_translator::{Enricher, FailureKind};
use verso_types::{Song, VocabularyEntry, VocabularyState};

use crate::collection::{load_collection, save_collection};
use crate::error::RunError;
use crate::tokenizer::extract_unique_words;

/// What happened to a single song during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongOutcome {
    /// Song already carried vocabulary; `entries` is `None` for non-list values
    AlreadyHasVocabulary { entries: Option<usize> },
    NoLyrics,
    NoWords,
    Enriched { entries: usize, skipped: usize },
    /// Every word failed; the song is left without vocabulary
    NoVocabularyGenerated { skipped: usize },
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub songs: usize,
    pub enriched: usize,
    pub already_done: usize,
    pub without_lyrics: usize,
    pub without_vocabulary: usize,
    pub entries: usize,
    pub failed_words: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &SongOutcome) {
        self.songs += 1;
        match *outcome {
            SongOutcome::AlreadyHasVocabulary { .. } => self.already_done += 1,
            SongOutcome::NoLyrics | SongOutcome::NoWords => self.without_lyrics += 1,
            SongOutcome::Enriched { entries, skipped } => {
                self.enriched += 1;
                self.entries += entries;
                self.failed_words += skipped;
            }
            SongOutcome::NoVocabularyGenerated { skipped } => {
                self.without_vocabulary += 1;
                self.failed_words += skipped;
            }
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} song(s): {} enriched, {} already had vocabulary, {} without lyrics, {} without vocabulary; {} entries generated, {} words skipped",
            self.songs,
            self.enriched,
            self.already_done,
            self.without_lyrics,
            self.without_vocabulary,
            self.entries,
            self.failed_words,
        )
    }
}

/// Generate vocabulary for one song in place.
///
/// Songs that already have vocabulary are never touched. Per-word failures
/// are logged and skipped; `vocabulary` is only set if at least one word
/// succeeded.
pub async fn process_song<E>(song: &mut Song, config: &Config, enricher: &E) -> SongOutcome
where
    E: Enricher + ?Sized,
{
    match song.vocabulary_state() {
        VocabularyState::Present(entries) => {
            info!("Vocabulary already exists ({entries} words)");
            return SongOutcome::AlreadyHasVocabulary {
                entries: Some(entries),
            };
        }
        VocabularyState::Opaque => {
            info!("Vocabulary already exists");
            return SongOutcome::AlreadyHasVocabulary { entries: None };
        }
        VocabularyState::Missing => {}
    }

    let lines = song.lines();
    if lines.is_empty() {
        warn!("No lyrics found, skipping");
        return SongOutcome::NoLyrics;
    }

    let words = extract_unique_words(lines);
    if words.is_empty() {
        warn!("No words extracted from lyrics, skipping");
        return SongOutcome::NoWords;
    }

    let total = words.len();
    info!("Found {total} unique words");

    let batch_size = config.batch_size.get();
    let mut vocabulary = Vec::new();
    let mut skipped = 0;

    for (index, word) in words.into_iter().enumerate() {
        let result = enricher
            .enrich(&word, &config.language, &config.enricher.model)
            .await;

        match result {
            Ok(gloss) => {
                vocabulary.push(VocabularyEntry::new(word, gloss));
                if (index + 1) % batch_size == 0 {
                    info!("Processed {}/{total} words", index + 1);
                }
            }
            Err(e) => {
                skipped += 1;
                match e.kind() {
                    FailureKind::WordParseFailure => {
                        warn!("Failed to parse response for '{word}': {e}")
                    }
                    FailureKind::WordApiFailure => warn!("API error for '{word}': {e}"),
                }
                warn!("Skipped '{word}'");
            }
        }
    }

    if vocabulary.is_empty() {
        warn!("No vocabulary generated");
        return SongOutcome::NoVocabularyGenerated { skipped };
    }

    let entries = vocabulary.len();
    song.set_vocabulary(vocabulary);
    info!("Generated {entries} vocabulary entries");

    SongOutcome::Enriched { entries, skipped }
}

/// Enrich every song in `input` and write the full collection to `output`.
///
/// Only load, credential and write failures abort the run. The credential is
/// only required when the enricher says it needs one.
pub async fn run<E>(
    input: &Path,
    output: &Path,
    config: &Config,
    enricher: &E,
) -> Result<RunSummary, RunError>
where
    E: Enricher + ?Sized,
{
    let mut songs = load_collection(input)?;

    if enricher.metadata().requires_api_key && !config.enricher.has_api_key() {
        return Err(RunError::MissingCredential);
    }

    let total = songs.len();
    info!("Processing {total} song(s)...");
    info!("Model: {}", config.enricher.model);
    info!("Language: {}", config.language);

    let mut summary = RunSummary::default();

    for (index, song) in songs.iter_mut().enumerate() {
        let position = index + 1;
        info!("[{position}/{total}] {}", song.display_title(position));

        let outcome = process_song(song, config, enricher).await;
        summary.record(&outcome);
    }

    save_collection(output, &songs)?;
    info!("Saved to {}", output.display());
    info!("{summary}");

    Ok(summary)
}
