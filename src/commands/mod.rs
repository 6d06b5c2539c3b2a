//! Command implementations

pub mod audit;
pub mod check;
pub mod play;

pub use audit::{AuditResult, audit_guess};
pub use check::{CheckResult, CheckStep, check_guesses};
pub use play::{PlaySession, Rejection, run_play};

use crate::core::{Pattern, Row, Word};
use crate::wordlists::Vocabulary;

/// Parse a guess and make sure the vocabulary accepts it
///
/// # Errors
/// Returns a [`Rejection`] for malformed input or words outside the vocabulary.
pub fn parse_guess(vocabulary: &Vocabulary, text: &str) -> Result<Word, Rejection> {
    let word = Word::with_length(text.trim(), vocabulary.word_length())?;
    if !vocabulary.contains(word.text()) {
        return Err(Rejection::UnknownWord(word.text().to_string()));
    }
    Ok(word)
}

/// Parse a `word:feedback` history entry such as `train:-G---`
///
/// # Errors
/// Returns a [`Rejection`] when either half is malformed or their lengths differ.
pub fn parse_row(vocabulary: &Vocabulary, entry: &str) -> Result<Row, Rejection> {
    let (word, feedback) = entry
        .split_once(':')
        .ok_or_else(|| Rejection::MalformedRow(entry.to_string()))?;
    let guess = parse_guess(vocabulary, word)?;
    let pattern: Pattern = feedback.trim().parse()?;
    Ok(Row::new(guess, pattern)?)
}
