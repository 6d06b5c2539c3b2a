//! The vocabulary the engine filters and scores over
//!
//! Two ordered lists: answers (possible secrets, the base candidate pool)
//! and extra guesses (accepted as input, never proposed as secrets).

use super::loader::{load_from_file, words_from_slice};
use super::{ANSWERS, EXTRA};
use crate::core::{EngineError, Word, ensure_length};
use crate::game::DEFAULT_WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_length: usize,
    answers: Vec<Word>,
    extra: Vec<Word>,
    /// Every acceptable guess, mapped to whether it is an answer
    index: FxHashMap<String, bool>,
}

impl Vocabulary {
    /// Build a vocabulary, checking every word has `word_length` letters
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` for the first word of another length.
    pub fn new(
        word_length: usize,
        answers: Vec<Word>,
        extra: Vec<Word>,
    ) -> Result<Self, EngineError> {
        for word in answers.iter().chain(&extra) {
            ensure_length(word_length, word.len())?;
        }
        Ok(Self::from_parts(word_length, answers, extra))
    }

    /// The word lists compiled into the crate
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_parts(
            DEFAULT_WORD_LENGTH,
            words_from_slice(ANSWERS, DEFAULT_WORD_LENGTH),
            words_from_slice(EXTRA, DEFAULT_WORD_LENGTH),
        )
    }

    /// Load answers (and optionally extra guesses) from files
    ///
    /// Entries of the wrong length are skipped.
    ///
    /// # Errors
    /// Returns an I/O error if a file cannot be read.
    pub fn from_files(
        word_length: usize,
        answers: impl AsRef<Path>,
        extra: Option<&Path>,
    ) -> io::Result<Self> {
        let answers = load_from_file(answers, word_length)?;
        let extra = match extra {
            Some(path) => load_from_file(path, word_length)?,
            None => Vec::new(),
        };
        Ok(Self::from_parts(word_length, answers, extra))
    }

    fn from_parts(word_length: usize, answers: Vec<Word>, extra: Vec<Word>) -> Self {
        // Answers go in last so a word on both lists counts as an answer
        let index = extra
            .iter()
            .map(|w| (w.text().to_string(), false))
            .chain(answers.iter().map(|w| (w.text().to_string(), true)))
            .collect();
        log::debug!(
            "vocabulary: {} answers, {} extra guesses, length {word_length}",
            answers.len(),
            extra.len()
        );
        Self {
            word_length,
            answers,
            extra,
            index,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Possible secrets, in list order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Accepted guesses that are never secrets
    #[inline]
    #[must_use]
    pub fn extra(&self) -> &[Word] {
        &self.extra
    }

    /// Is `text` an acceptable guess (answer or extra)?
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(&text.to_ascii_lowercase())
    }

    /// Could `text` be a secret?
    #[must_use]
    pub fn is_answer(&self, text: &str) -> bool {
        self.index
            .get(&text.to_ascii_lowercase())
            .copied()
            .unwrap_or(false)
    }

    /// Number of distinct acceptable guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::embedded()
    }
}
