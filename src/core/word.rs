//! Word representation
//!
//! A `Word` keeps its text together with the letter indices and the two
//! bitmask encodings the constraint code works on, so that no hot path ever
//! has to re-parse a string.

use super::EngineError;
use super::error::ensure_length;
use super::letters::{LetterSet, letter_bit, letter_char};
use std::fmt;
use std::str::FromStr;

/// A fixed word drawn from the vocabulary or typed as a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
    set: LetterSet,
    positional: Box<[LetterSet]>,
}

impl Word {
    /// Create a new Word from a string of any positive length
    ///
    /// Input is lower-cased first.
    ///
    /// # Errors
    /// Returns `EngineError::EmptyWord` for an empty string and
    /// `EngineError::InvalidLetter` for any character outside `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, EngineError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(EngineError::EmptyWord);
        }

        let letters = text
            .chars()
            .map(letter_bit)
            .collect::<Result<Box<[u8]>, _>>()?;

        let positional: Box<[LetterSet]> =
            letters.iter().map(|&l| LetterSet::single(l)).collect();
        let set = positional
            .iter()
            .fold(LetterSet::EMPTY, |acc, &bit| acc | bit);

        Ok(Self {
            text,
            letters,
            set,
            positional,
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// As [`Word::new`], plus `EngineError::LengthMismatch` for any other length.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, EngineError> {
        let word = Self::new(text)?;
        ensure_length(length, word.len())?;
        Ok(word)
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter indices (0-25) in word order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Letter index at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Character at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        letter_char(self.letters[position])
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn set(&self) -> LetterSet {
        self.set
    }

    /// Singleton mask of the letter at each position
    #[inline]
    #[must_use]
    pub fn positional(&self) -> &[LetterSet] {
        &self.positional
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.set.contains(letter)
    }

    /// How many times a letter occurs
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Word {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
