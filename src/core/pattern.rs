//! Feedback symbols and whole-row feedback patterns
//!
//! A pattern holds one symbol per letter of the guess:
//! - Hit = letter in the correct position
//! - Present = letter in the secret, but somewhere else
//! - Absent = letter not in the secret (or no unconsumed copy left)
//! - Empty = unfilled board cell, ignored by every constraint computation

use super::{EngineError, Word};
use super::error::ensure_length;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Hit,
    Present,
    Absent,
    Empty,
}

impl Feedback {
    /// Parse a single feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Hit
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/'x'/⬜/⬛ for Absent
    /// - '.'/' '/🔳 for Empty
    ///
    /// # Errors
    /// Returns `EngineError::InvalidFeedback` for any other character.
    pub const fn from_char(c: char) -> Result<Self, EngineError> {
        match c {
            'G' | 'g' | '🟩' => Ok(Self::Hit),
            'Y' | 'y' | '🟨' => Ok(Self::Present),
            '-' | '_' | 'x' | 'X' | '⬜' | '⬛' => Ok(Self::Absent),
            '.' | ' ' | '🔳' => Ok(Self::Empty),
            _ => Err(EngineError::InvalidFeedback(c)),
        }
    }

    /// Single-letter form used on the command line
    #[must_use]
    pub const fn to_letter(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => '.',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '🔳',
        }
    }
}

/// Feedback for a complete guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Box<[Feedback]>);

impl Pattern {
    #[must_use]
    pub fn new(feedback: impl Into<Box<[Feedback]>>) -> Self {
        Self(feedback.into())
    }

    /// All hits (solved row)
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self(vec![Feedback::Hit; length].into())
    }

    /// Calculate the feedback `guess` receives when `secret` is the hidden word
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact position match as Hit and consume that
    ///    secret letter
    /// 2. Second pass: for every other position, take the leftmost unconsumed
    ///    occurrence of the guessed letter in the secret; if there is one the
    ///    position is Present and that occurrence is consumed, otherwise Absent
    ///
    /// The Hit + Present count for any letter therefore never exceeds its
    /// occurrence count in the secret.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` when the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{Feedback, Pattern, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&secret, &guess).unwrap();
    ///
    /// assert_eq!(pattern.to_string(), "--G-G");
    /// assert_eq!(pattern.count(Feedback::Hit), 2);
    /// ```
    pub fn calculate(secret: &Word, guess: &Word) -> Result<Self, EngineError> {
        ensure_length(secret.len(), guess.len())?;

        let secret = secret.letters();
        let guess = guess.letters();
        let mut result = vec![Feedback::Absent; guess.len()];
        let mut consumed = vec![false; secret.len()];

        // First pass: hits
        for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                result[i] = Feedback::Hit;
                consumed[i] = true;
            }
        }

        // Second pass: presents from the unconsumed pool
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == Feedback::Hit {
                continue;
            }
            let available = secret
                .iter()
                .zip(consumed.iter())
                .position(|(&s, &used)| !used && s == g);
            if let Some(j) = available {
                consumed[j] = true;
                result[i] = Feedback::Present;
            }
        }

        Ok(Self(result.into()))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Feedback] {
        &self.0
    }

    /// Feedback at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// True when every position is a Hit
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Hit)
    }

    /// Count the positions carrying `kind`
    #[must_use]
    pub fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Render as coloured squares, e.g. "⬛🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl FromStr for Pattern {
    type Err = EngineError;

    /// Parse a pattern like "GY-GY" or "🟩🟨⬛🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(Feedback::from_char)
            .collect::<Result<Box<[Feedback]>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0.iter() {
            write!(f, "{}", symbol.to_letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Hit, Present};

    fn calc(secret: &str, guess: &str) -> Pattern {
        Pattern::calculate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap()).unwrap()
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = calc("fghij", "abcde");
        assert_eq!(pattern.count(Absent), 5);
        assert!(!pattern.is_perfect());
    }

    #[test]
    fn pattern_all_hit() {
        for word in ["crane", "slate", "aaaaa", "zzzzz"] {
            assert!(calc(word, word).is_perfect());
            assert_eq!(calc(word, word), Pattern::perfect(5));
        }
    }

    #[test]
    fn pattern_hits_take_priority_over_presents() {
        // ROBOT guessed against FLOOR: the second O is a hit, the first
        // one takes the remaining O in FLOOR
        let pattern = calc("floor", "robot");
        assert_eq!(pattern.symbols(), &[Present, Present, Absent, Hit, Absent]);
    }

    #[test]
    fn pattern_duplicate_guess_letters_limited_by_secret() {
        // Only one E is left for presents once the hit is consumed
        let pattern = calc("creep", "geese");
        assert_eq!(pattern.symbols(), &[Absent, Present, Hit, Absent, Absent]);
    }

    #[test]
    fn pattern_presents_consume_left_to_right() {
        let pattern = calc("abbey", "kebab");
        assert_eq!(pattern.symbols(), &[Absent, Present, Hit, Present, Present]);
    }

    #[test]
    fn pattern_length_mismatch() {
        let secret = Word::new("crane").unwrap();
        let guess = Word::new("cranes").unwrap();
        assert_eq!(
            Pattern::calculate(&secret, &guess),
            Err(EngineError::LengthMismatch {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1: Pattern = "GY-G.".parse().unwrap();
        let p2: Pattern = "🟩🟨⬛🟩🔳".parse().unwrap();
        let p3: Pattern = "gy_g ".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.at(4), Feedback::Empty);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert_eq!(
            "GXQ".parse::<Pattern>(),
            Err(EngineError::InvalidFeedback('Q'))
        );
    }

    #[test]
    fn pattern_renders() {
        let pattern: Pattern = "GY-.G".parse().unwrap();
        assert_eq!(pattern.to_string(), "GY-.G");
        assert_eq!(pattern.to_emoji(), "🟩🟨⬛🔳🟩");
    }

    #[test]
    fn empty_pattern_is_not_perfect() {
        assert!(!Pattern::new(Vec::<Feedback>::new()).is_perfect());
    }
}
