//! Worst-case secret scoring
//!
//! For a proposed guess, every remaining candidate is tried as the secret:
//! the clues the guess would earn against it are folded into the current
//! constraint state, and the candidates still matching are counted. The
//! candidate leaving the most words unresolved is the hardest secret for
//! that guess.

use crate::constraints::{ConstraintState, get_matches};
use crate::core::Word;
use rayon::prelude::*;

/// Count candidates other than `guess` still matching once `guess` is
/// played against `goal`
#[must_use]
pub fn remaining_after(
    state: &ConstraintState,
    candidates: &[&Word],
    guess: &Word,
    goal: &Word,
) -> usize {
    let simulated = state.simulate(guess, goal);
    get_matches(&simulated, candidates.iter().copied())
        .filter(|word| word.text() != guess.text())
        .count()
}

/// Score every candidate as the secret for `guess`
///
/// Returns `(candidate, remaining)` pairs in candidate order.
#[must_use]
pub fn score_secrets<'a>(
    state: &ConstraintState,
    candidates: &[&'a Word],
    guess: &Word,
) -> Vec<(&'a Word, usize)> {
    candidates
        .par_iter()
        .map(|&goal| (goal, remaining_after(state, candidates, guess, goal)))
        .collect()
}

/// Pick the candidate with the largest remaining count
///
/// Ties go to the earliest candidate. Returns `None` if there are no
/// candidates.
///
/// # Examples
/// ```
/// use wordle_constraints::constraints::ConstraintState;
/// use wordle_constraints::core::Word;
/// use wordle_constraints::solver::hardest_secret;
///
/// let words: Vec<Word> = ["crate", "grate", "irate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
/// let guess = Word::new("crane").unwrap();
///
/// let (hardest, remaining) =
///     hardest_secret(&ConstraintState::new(5), &candidates, &guess).unwrap();
/// assert_eq!(hardest.text(), "grate");
/// assert_eq!(remaining, 2);
/// ```
#[must_use]
pub fn hardest_secret<'a>(
    state: &ConstraintState,
    candidates: &[&'a Word],
    guess: &Word,
) -> Option<(&'a Word, usize)> {
    pick_hardest(score_secrets(state, candidates, guess))
}

/// The first entry with the largest remaining count
#[must_use]
pub fn pick_hardest<'a>(
    scores: impl IntoIterator<Item = (&'a Word, usize)>,
) -> Option<(&'a Word, usize)> {
    scores.into_iter().fold(None, |best, (word, remaining)| match best {
        Some((_, top)) if top >= remaining => best,
        _ => Some((word, remaining)),
    })
}
