//! Candidate filtering against an aggregate constraint state

use super::ConstraintState;
use crate::core::Word;

/// Check whether `word` is consistent with every clue in `state`
///
/// A word is rejected when it:
/// 1. contains a globally absent letter
/// 2. has a letter at a column where that letter is ruled out
/// 3. misses any letter known to be present
/// 4. has a yellow-flagged letter at the column it was flagged at
/// 5. disagrees with a confirmed green letter
///
/// Words of another length never match.
///
/// # Examples
/// ```
/// use wordle_constraints::constraints::{ConstraintState, is_match};
/// use wordle_constraints::core::{Row, Word};
///
/// let row = Row::new(Word::new("train").unwrap(), "-G---".parse().unwrap()).unwrap();
/// let state = ConstraintState::from_rows(5, [&row]).unwrap();
///
/// assert!(is_match(&state, &Word::new("dress").unwrap()));
/// assert!(!is_match(&state, &Word::new("drain").unwrap()));
/// ```
#[must_use]
pub fn is_match(state: &ConstraintState, word: &Word) -> bool {
    if word.len() != state.word_length() {
        return false;
    }

    let set = word.set();
    let positional = word.positional();

    // Does any absent letter appear in the word?
    if set.intersects(state.global_absent()) {
        return false;
    }

    // Any letter sitting in a column where it is ruled out?
    if positional
        .iter()
        .zip(state.column_absent())
        .any(|(&p, &absent)| p.intersects(absent))
    {
        return false;
    }

    // Does the word hold every present letter?
    if !set.contains_all(state.required()) {
        return false;
    }

    // Any present letter back in the column it was flagged at?
    if positional
        .iter()
        .zip(state.yellow())
        .any(|(&p, &yellow)| p.intersects(yellow))
    {
        return false;
    }

    // Do all greens match?
    positional
        .iter()
        .zip(state.green())
        .all(|(&p, &green)| green.is_empty() || p == green)
}

/// Lazily yield the words of `words` that match `state`, in iteration order
///
/// The iterator borrows both inputs; calling again restarts from the top.
pub fn get_matches<'w, I>(state: &ConstraintState, words: I) -> impl Iterator<Item = &'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    words.into_iter().filter(move |word| is_match(state, word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Row};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn state_after(rows: &[(&str, &str)]) -> ConstraintState {
        let rows: Vec<Row> = rows
            .iter()
            .map(|(g, p)| {
                Row::new(Word::new(*g).unwrap(), p.parse::<Pattern>().unwrap()).unwrap()
            })
            .collect();
        ConstraintState::from_rows(5, &rows).unwrap()
    }

    #[test]
    fn unconstrained_state_matches_everything() {
        let state = ConstraintState::new(5);
        let vocab = words(&["crane", "slate", "robot"]);
        assert_eq!(get_matches(&state, &vocab).count(), 3);
    }

    #[test]
    fn rejects_globally_absent_letters() {
        let state = state_after(&[("train", "-G---")]);
        assert!(!is_match(&state, &Word::new("brine").unwrap()));
        assert!(is_match(&state, &Word::new("prove").unwrap()));
    }

    #[test]
    fn rejects_column_absent_letters() {
        // Second E in SPEED is absent at column 2 only
        let state = state_after(&[("speed", "---G-")]);
        assert!(is_match(&state, &Word::new("bluer").unwrap()));
        assert!(!is_match(&state, &Word::new("cheer").unwrap()));
    }

    #[test]
    fn requires_present_letters_elsewhere() {
        let state = state_after(&[("train", "--Y--")]);
        // holds A, not at column 2
        assert!(is_match(&state, &Word::new("label").unwrap()));
        // A at the flagged column
        assert!(!is_match(&state, &Word::new("cease").unwrap()));
        // no A at all
        assert!(!is_match(&state, &Word::new("hello").unwrap()));
    }

    #[test]
    fn requires_greens() {
        let state = state_after(&[("crane", "G---G")]);
        assert!(is_match(&state, &Word::new("clove").unwrap()));
        assert!(!is_match(&state, &Word::new("glove").unwrap()));
    }

    #[test]
    fn wrong_length_never_matches() {
        let state = ConstraintState::new(5);
        assert!(is_match(&state, &Word::new("crane").unwrap()));
        assert!(!is_match(&state, &Word::new("cranes").unwrap()));
    }

    #[test]
    fn keeps_vocabulary_order() {
        let state = state_after(&[("crane", "G---G")]);
        let vocab = words(&["glove", "clove", "slate", "close", "chime"]);
        let matched: Vec<&str> = get_matches(&state, &vocab).map(Word::text).collect();
        assert_eq!(matched, ["clove", "close", "chime"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let state = state_after(&[("crane", "G---G")]);
        let vocab = words(&["glove", "clove", "slate", "close", "chime"]);

        let once: Vec<&Word> = get_matches(&state, &vocab).collect();
        let twice: Vec<&Word> = get_matches(&state, once.iter().copied()).collect();
        assert_eq!(once, twice);
    }
}
