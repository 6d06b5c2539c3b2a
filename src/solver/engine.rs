//! Engine interface used by the game and presentation layers

use super::recommender::{hardest_secret, score_secrets};
use crate::constraints::{ConstraintState, get_matches};
use crate::core::{EngineError, Pattern, Word, ensure_length};
use crate::game::{Board, HardModeCheck};
use crate::wordlists::Vocabulary;

/// Constraint engine over a fixed vocabulary
///
/// Every operation is a pure function of the board and the vocabulary.
pub struct Engine<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> Engine<'a> {
    #[must_use]
    pub const fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// Feedback for `guess` against `secret`
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if either word differs from the
    /// vocabulary's word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::core::{Feedback, Word};
    /// use wordle_constraints::solver::Engine;
    /// use wordle_constraints::wordlists::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::embedded();
    /// let engine = Engine::new(&vocabulary);
    /// let secret = Word::new("robot").unwrap();
    /// let guess = Word::new("outdo").unwrap();
    ///
    /// let pattern = engine.compute_feedback(&secret, &guess).unwrap();
    /// assert_eq!(pattern.to_string(), "Y-Y-Y");
    /// ```
    pub fn compute_feedback(&self, secret: &Word, guess: &Word) -> Result<Pattern, EngineError> {
        ensure_length(self.vocabulary.word_length(), secret.len())?;
        ensure_length(self.vocabulary.word_length(), guess.len())?;
        Pattern::calculate(secret, guess)
    }

    /// Answers consistent with every row of `board`, in vocabulary order
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if the board's word length
    /// differs from the vocabulary's.
    pub fn filter_candidates(&self, board: &Board) -> Result<Vec<&'a Word>, EngineError> {
        let state = self.constraints(board)?;
        let candidates: Vec<&'a Word> = get_matches(&state, self.vocabulary.answers()).collect();
        log::debug!(
            "{} of {} answers remain after {} rows",
            candidates.len(),
            self.vocabulary.answers().len(),
            board.len()
        );
        Ok(candidates)
    }

    /// Number of answers consistent with `board`
    ///
    /// # Errors
    /// See [`Engine::filter_candidates`].
    pub fn count_candidates(&self, board: &Board) -> Result<usize, EngineError> {
        let state = self.constraints(board)?;
        Ok(get_matches(&state, self.vocabulary.answers()).count())
    }

    /// Hard-mode check of board row `row` against the row before it
    ///
    /// # Errors
    /// Returns `EngineError::RowOutOfRange` if `row` is not on the board.
    pub fn validate_hard_mode(
        &self,
        board: &Board,
        row: usize,
    ) -> Result<HardModeCheck, EngineError> {
        board.validate_hard_mode(row)
    }

    /// The remaining candidate that leaves the most words unresolved if
    /// `guess` were played against it
    ///
    /// Returns `Ok(None)` when no candidate remains.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if `guess` or the board does
    /// not match the vocabulary's word length.
    pub fn recommend_hardest_secret(
        &self,
        board: &Board,
        guess: &Word,
    ) -> Result<Option<&'a Word>, EngineError> {
        ensure_length(self.vocabulary.word_length(), guess.len())?;
        let state = self.constraints(board)?;
        let candidates: Vec<&'a Word> = get_matches(&state, self.vocabulary.answers()).collect();

        let hardest = hardest_secret(&state, &candidates, guess);
        match hardest {
            Some((word, remaining)) => {
                log::debug!("hardest secret for {guess}: {word} leaves {remaining}");
            }
            None => log::debug!("no candidates left to score {guess} against"),
        }
        Ok(hardest.map(|(word, _)| word))
    }

    /// Every remaining candidate paired with the count it would leave
    /// unresolved against `guess`, in candidate order
    ///
    /// # Errors
    /// Same as [`Engine::recommend_hardest_secret`].
    pub fn score_guess(
        &self,
        board: &Board,
        guess: &Word,
    ) -> Result<Vec<(&'a Word, usize)>, EngineError> {
        ensure_length(self.vocabulary.word_length(), guess.len())?;
        let state = self.constraints(board)?;
        let candidates: Vec<&'a Word> = get_matches(&state, self.vocabulary.answers()).collect();
        Ok(score_secrets(&state, &candidates, guess))
    }

    fn constraints(&self, board: &Board) -> Result<ConstraintState, EngineError> {
        ensure_length(self.vocabulary.word_length(), board.config().word_length)?;
        board.constraints()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Row;
    use crate::game::{GameConfig, ViolationKind};

    fn vocabulary(answers: &[&str]) -> Vocabulary {
        let answers = answers.iter().map(|w| Word::new(*w).unwrap()).collect();
        Vocabulary::new(5, answers, Vec::new()).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn row(guess: &str, feedback: &str) -> Row {
        Row::new(word(guess), feedback.parse().unwrap()).unwrap()
    }

    #[test]
    fn empty_board_keeps_every_answer() {
        let vocab = vocabulary(&["crate", "grate", "slate"]);
        let engine = Engine::new(&vocab);
        let board = Board::new(GameConfig::default());

        let candidates = engine.filter_candidates(&board).unwrap();
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["crate", "grate", "slate"]);
        assert_eq!(engine.count_candidates(&board).unwrap(), 3);
    }

    #[test]
    fn filter_applies_board_rows() {
        let vocab = vocabulary(&["crate", "grate", "slate", "drain"]);
        let engine = Engine::new(&vocab);
        let board = Board::with_rows(GameConfig::default(), vec![row("train", "-GG--")]).unwrap();

        let candidates = engine.filter_candidates(&board).unwrap();
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        // t, i, n are absent; r and a sit in columns 1 and 2
        assert_eq!(texts, Vec::<&str>::new());

        let board = Board::with_rows(GameConfig::default(), vec![row("slate", "--GGG")]).unwrap();
        let candidates = engine.filter_candidates(&board).unwrap();
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["crate", "grate"]);
    }

    #[test]
    fn recommend_picks_hardest_candidate() {
        let vocab = vocabulary(&["crate", "grate", "irate", "slate"]);
        let engine = Engine::new(&vocab);
        let board = Board::new(GameConfig::default());

        let hardest = engine.recommend_hardest_secret(&board, &word("crane")).unwrap();
        assert_eq!(hardest.map(Word::text), Some("grate"));
    }

    #[test]
    fn recommend_with_no_candidates_is_none() {
        let vocab = vocabulary(&["crate", "grate"]);
        let engine = Engine::new(&vocab);
        let board = Board::with_rows(GameConfig::default(), vec![row("crate", "-----")]).unwrap();

        assert_eq!(engine.filter_candidates(&board).unwrap().len(), 0);
        assert_eq!(engine.recommend_hardest_secret(&board, &word("slate")).unwrap(), None);
        assert!(engine.score_guess(&board, &word("slate")).unwrap().is_empty());
    }

    #[test]
    fn recommend_rejects_wrong_length_guess() {
        let vocab = vocabulary(&["crate"]);
        let engine = Engine::new(&vocab);
        let board = Board::new(GameConfig::default());

        let result = engine.recommend_hardest_secret(&board, &word("crates"));
        assert_eq!(
            result,
            Err(EngineError::LengthMismatch {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn feedback_rejects_words_of_other_length() {
        let vocab = vocabulary(&["crate"]);
        let engine = Engine::new(&vocab);
        let mismatch = Err(EngineError::LengthMismatch {
            expected: 5,
            found: 6,
        });

        assert_eq!(engine.compute_feedback(&word("quartz"), &word("plants")), mismatch);
        assert_eq!(engine.compute_feedback(&word("crate"), &word("plants")), mismatch);
        assert_eq!(engine.compute_feedback(&word("quartz"), &word("crate")), mismatch);
        assert_eq!(
            engine.compute_feedback(&word("crate"), &word("trace")).unwrap().to_string(),
            "YGGYG"
        );
    }

    #[test]
    fn board_of_other_length_is_rejected() {
        let vocab = vocabulary(&["crate"]);
        let engine = Engine::new(&vocab);
        let board = Board::new(GameConfig::new(6, 6));

        assert!(matches!(
            engine.filter_candidates(&board),
            Err(EngineError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn score_guess_lists_every_candidate() {
        let vocab = vocabulary(&["crate", "grate", "irate", "slate"]);
        let engine = Engine::new(&vocab);
        let board = Board::new(GameConfig::default());

        let scores = engine.score_guess(&board, &word("crane")).unwrap();
        let counts: Vec<usize> = scores.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, [1, 2, 2, 1]);
    }

    #[test]
    fn hard_mode_goes_through_board() {
        let vocab = vocabulary(&["train", "fjord"]);
        let engine = Engine::new(&vocab);
        let board = Board::with_rows(
            GameConfig::default().with_hard_mode(true),
            vec![row("train", "-G---"), row("fjord", "-----")],
        )
        .unwrap();

        let check = engine.validate_hard_mode(&board, 1).unwrap();
        assert_eq!(check.violation().map(|v| v.kind), Some(ViolationKind::MustBeHit));
        assert!(engine.validate_hard_mode(&board, 0).unwrap().is_valid());
        assert!(engine.validate_hard_mode(&board, 5).is_err());
    }
}
