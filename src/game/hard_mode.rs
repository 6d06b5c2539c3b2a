//! Hard-mode guess validation
//!
//! A hard-mode guess must keep every Hit of the previous row in place and
//! must contain every letter the previous row scored as Present. Only the
//! immediately preceding row is consulted.

use crate::core::{EngineError, Feedback, Row, Word, ensure_length};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The letter must stay at its column
    MustBeHit,
    /// The letter must appear somewhere in the guess
    MustContain,
}

/// The first clue a guess failed to reuse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// Column of the clue in the previous row (0-based)
    pub position: usize,
    pub letter: char,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.letter.to_ascii_uppercase();
        match self.kind {
            ViolationKind::MustBeHit => {
                write!(f, "{} letter must be {letter}", ordinal(self.position + 1))
            }
            ViolationKind::MustContain => write!(f, "Guess must contain {letter}"),
        }
    }
}

/// Outcome of a hard-mode check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardModeCheck {
    Valid,
    Violation(Violation),
}

impl HardModeCheck {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub const fn violation(&self) -> Option<Violation> {
        match self {
            Self::Valid => None,
            Self::Violation(v) => Some(*v),
        }
    }
}

/// Check `guess` against the clues of `previous`
///
/// Hit columns are checked first, then Present columns, each left to right;
/// the first failure is reported.
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if `guess` and the previous row differ in length.
///
/// # Examples
/// ```
/// use wordle_constraints::core::{Row, Word};
/// use wordle_constraints::game::hard_mode::{self, ViolationKind};
///
/// let previous = Row::new(Word::new("train").unwrap(), "-G---".parse().unwrap()).unwrap();
///
/// let ok = hard_mode::check(&previous, &Word::new("drain").unwrap()).unwrap();
/// assert!(ok.is_valid());
///
/// let bad = hard_mode::check(&previous, &Word::new("fjord").unwrap()).unwrap();
/// let violation = bad.violation().unwrap();
/// assert_eq!(violation.kind, ViolationKind::MustBeHit);
/// assert_eq!(violation.to_string(), "2nd letter must be R");
/// ```
pub fn check(previous: &Row, guess: &Word) -> Result<HardModeCheck, EngineError> {
    let clue = previous.guess();
    ensure_length(clue.len(), guess.len())?;

    let symbols = previous.pattern().symbols();

    let missed_hit = symbols.iter().enumerate().find(|&(pos, &feedback)| {
        feedback == Feedback::Hit && clue.letter_at(pos) != guess.letter_at(pos)
    });
    if let Some((position, _)) = missed_hit {
        return Ok(violation(clue, position, ViolationKind::MustBeHit));
    }

    let missed_present = symbols.iter().enumerate().find(|&(pos, &feedback)| {
        feedback == Feedback::Present && !guess.has_letter(clue.letter_at(pos))
    });
    if let Some((position, _)) = missed_present {
        return Ok(violation(clue, position, ViolationKind::MustContain));
    }

    Ok(HardModeCheck::Valid)
}

fn violation(clue: &Word, position: usize, kind: ViolationKind) -> HardModeCheck {
    HardModeCheck::Violation(Violation {
        position,
        letter: clue.char_at(position),
        kind,
    })
}

/// English ordinal for a 1-based position: 1st, 2nd, 3rd, 4th, ..., 11th, 21st
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
