//! A scored board row: a guess together with the feedback it received

use super::error::ensure_length;
use super::{EngineError, Pattern, Word};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    guess: Word,
    pattern: Pattern,
}

impl Row {
    /// Pair a guess with its feedback
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the pattern does not have one
    /// symbol per letter.
    pub fn new(guess: Word, pattern: Pattern) -> Result<Self, EngineError> {
        ensure_length(guess.len(), pattern.len())?;
        Ok(Self { guess, pattern })
    }

    /// Score `guess` against `secret` and keep the result
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` when the words differ in length.
    pub fn score(secret: &Word, guess: Word) -> Result<Self, EngineError> {
        let pattern = Pattern::calculate(secret, &guess)?;
        Ok(Self { guess, pattern })
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pattern.is_perfect()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.pattern)
    }
}
