//! Aggregate constraint state
//!
//! Folds a history of scored rows into five masks:
//! - `global_absent`: letters that occur nowhere in the secret
//! - `column_absent[c]`: letters ruled out at column `c` only
//! - `green[c]`: the confirmed letter at column `c` (empty if unknown)
//! - `yellow[c]`: letters known to be in the secret but not at column `c`
//! - `required`: union of every `yellow[c]`

use crate::core::{EngineError, Feedback, LetterSet, Row, Word, ensure_length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    global_absent: LetterSet,
    column_absent: Box<[LetterSet]>,
    green: Box<[LetterSet]>,
    yellow: Box<[LetterSet]>,
    required: LetterSet,
}

impl ConstraintState {
    /// State with no knowledge, matching every word of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        let empty = vec![LetterSet::EMPTY; word_length].into_boxed_slice();
        Self {
            global_absent: LetterSet::EMPTY,
            column_absent: empty.clone(),
            green: empty.clone(),
            yellow: empty,
            required: LetterSet::EMPTY,
        }
    }

    /// Fold `rows` in order into a fresh state
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` for a row of another length.
    ///
    /// # Examples
    /// ```
    /// use wordle_constraints::constraints::ConstraintState;
    /// use wordle_constraints::core::{Row, Word};
    ///
    /// let row = Row::new(Word::new("train").unwrap(), "-G---".parse().unwrap()).unwrap();
    /// let state = ConstraintState::from_rows(5, [&row]).unwrap();
    ///
    /// assert_eq!(state.green()[1].to_string(), "r");
    /// assert_eq!(state.global_absent().to_string(), "aint");
    /// ```
    pub fn from_rows<'r>(
        word_length: usize,
        rows: impl IntoIterator<Item = &'r Row>,
    ) -> Result<Self, EngineError> {
        let mut state = Self::new(word_length);
        let mut folded = 0usize;
        for row in rows {
            state.fold_row(row)?;
            folded += 1;
        }
        log::trace!(
            "folded {folded} rows: absent={} required={}",
            state.global_absent,
            state.required
        );
        Ok(state)
    }

    /// Add one row's clues
    ///
    /// Absent letters are collected first. A letter that is Absent in one
    /// column but Hit or Present in another column of the same row only
    /// says "no further copies", so it stays in `column_absent` and is kept
    /// out of `global_absent`.
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` for a row of another length.
    pub fn fold_row(&mut self, row: &Row) -> Result<(), EngineError> {
        ensure_length(self.word_length(), row.guess().len())?;

        let cells = || row.pattern().symbols().iter().zip(row.guess().positional());

        let mut row_absent = LetterSet::EMPTY;
        for (col, (&feedback, &bit)) in cells().enumerate() {
            if feedback == Feedback::Absent {
                row_absent |= bit;
                self.column_absent[col] |= bit;
            }
        }

        for (col, (&feedback, &bit)) in cells().enumerate() {
            match feedback {
                Feedback::Hit => {
                    self.green[col] = bit;
                    row_absent = row_absent.difference(bit);
                }
                Feedback::Present => {
                    self.yellow[col] |= bit;
                    self.required |= bit;
                    row_absent = row_absent.difference(bit);
                }
                Feedback::Absent | Feedback::Empty => {}
            }
        }

        self.global_absent |= row_absent;
        Ok(())
    }

    /// The state that would follow if `guess` were played against `goal`
    ///
    /// New clues are unioned into a copy of `self`:
    /// - letters of `guess` missing from `goal` become globally absent
    /// - positions where both words agree become green
    /// - a guessed letter that `goal` holds elsewhere becomes yellow at that column
    #[must_use]
    pub fn simulate(&self, guess: &Word, goal: &Word) -> Self {
        debug_assert_eq!(guess.len(), self.word_length());
        debug_assert_eq!(goal.len(), self.word_length());

        let mut next = self.clone();
        next.global_absent |= guess.set().difference(goal.set());

        for (col, (&g, &t)) in guess.positional().iter().zip(goal.positional()).enumerate() {
            next.green[col] |= g & t;
            let misplaced = goal.set().difference(t) & g;
            next.yellow[col] |= misplaced;
            next.required |= misplaced;
        }

        next
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.green.len()
    }

    #[inline]
    #[must_use]
    pub const fn global_absent(&self) -> LetterSet {
        self.global_absent
    }

    #[inline]
    #[must_use]
    pub fn column_absent(&self) -> &[LetterSet] {
        &self.column_absent
    }

    #[inline]
    #[must_use]
    pub fn green(&self) -> &[LetterSet] {
        &self.green
    }

    #[inline]
    #[must_use]
    pub fn yellow(&self) -> &[LetterSet] {
        &self.yellow
    }

    /// Letters every candidate must contain somewhere
    #[inline]
    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    /// True when no clue has been recorded
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::new(self.word_length())
    }
}
