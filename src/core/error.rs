//! Error type shared by the engine
//!
//! Only malformed input fails. An empty candidate set is an ordinary outcome
//! and is reported through empty collections or `None`, never through here.

use thiserror::Error;

/// Errors raised when input does not fit the configured alphabet or shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Character outside `a..=z`
    #[error("'{0}' is not a letter of the alphabet")]
    InvalidLetter(char),

    /// Guess, secret, candidate or feedback row has the wrong length
    #[error("expected {expected} letters, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("a word needs at least one letter")]
    EmptyWord,

    /// Character that is not a feedback symbol
    #[error("'{0}' is not a feedback symbol")]
    InvalidFeedback(char),

    #[error("board already holds {capacity} rows")]
    BoardFull { capacity: usize },

    #[error("row {row} does not exist on a board with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
}

/// Check that `found` matches the configured length
///
/// # Errors
/// Returns `EngineError::LengthMismatch` when the lengths differ.
#[inline]
pub const fn ensure_length(expected: usize, found: usize) -> Result<(), EngineError> {
    if expected == found {
        Ok(())
    } else {
        Err(EngineError::LengthMismatch { expected, found })
    }
}
