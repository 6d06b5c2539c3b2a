//! The append-only board of scored guesses

use super::GameConfig;
use super::hard_mode::{self, HardModeCheck};
use crate::constraints::ConstraintState;
use crate::core::{EngineError, Row, Word, ensure_length};

/// Rows played so far, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    rows: Vec<Row>,
}

impl Board {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rows: Vec::with_capacity(config.max_rows),
        }
    }

    /// Build a board from already-scored rows
    ///
    /// # Errors
    /// Fails like [`Board::push`] on the first row that does not fit.
    pub fn with_rows(
        config: GameConfig,
        rows: impl IntoIterator<Item = Row>,
    ) -> Result<Self, EngineError> {
        let mut board = Self::new(config);
        for row in rows {
            board.push(row)?;
        }
        Ok(board)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.len() >= self.config.max_rows
    }

    /// True once the latest row is all hits
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows.last().is_some_and(Row::is_solved)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Row> {
        self.rows.last()
    }

    /// Append a scored row
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` for a row of the wrong length and
    /// `EngineError::BoardFull` once `max_rows` rows exist.
    pub fn push(&mut self, row: Row) -> Result<(), EngineError> {
        ensure_length(self.config.word_length, row.guess().len())?;
        if self.is_full() {
            return Err(EngineError::BoardFull {
                capacity: self.config.max_rows,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Score `guess` against `secret` and append the row
    ///
    /// # Errors
    /// As [`Board::push`].
    pub fn play(&mut self, secret: &Word, guess: Word) -> Result<&Row, EngineError> {
        ensure_length(self.config.word_length, secret.len())?;
        ensure_length(self.config.word_length, guess.len())?;
        let row = Row::score(secret, guess)?;
        self.push(row)?;
        Ok(&self.rows[self.rows.len() - 1])
    }

    /// Constraints from every row on the board
    ///
    /// # Errors
    /// Only fails if a stored row has the wrong length, which `push` prevents.
    pub fn constraints(&self) -> Result<ConstraintState, EngineError> {
        self.constraints_until(self.rows.len())
    }

    /// Constraints from rows `0..row`
    ///
    /// # Errors
    /// Returns `EngineError::RowOutOfRange` if `row` is past the last row.
    pub fn constraints_until(&self, row: usize) -> Result<ConstraintState, EngineError> {
        let rows = self
            .rows
            .get(..row)
            .ok_or(EngineError::RowOutOfRange {
                row,
                rows: self.rows.len(),
            })?;
        ConstraintState::from_rows(self.config.word_length, rows)
    }

    /// Check stored row `row` against the row before it
    ///
    /// The first row has nothing to reuse and is always valid.
    ///
    /// # Errors
    /// Returns `EngineError::RowOutOfRange` if `row` does not exist.
    pub fn validate_hard_mode(&self, row: usize) -> Result<HardModeCheck, EngineError> {
        let current = self.rows.get(row).ok_or(EngineError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })?;
        match row.checked_sub(1) {
            Some(previous) => hard_mode::check(&self.rows[previous], current.guess()),
            None => Ok(HardModeCheck::Valid),
        }
    }

    /// Check a guess that has not been played yet against the latest row
    ///
    /// # Errors
    /// Returns `EngineError::LengthMismatch` if `guess` has the wrong length.
    pub fn check_next(&self, guess: &Word) -> Result<HardModeCheck, EngineError> {
        ensure_length(self.config.word_length, guess.len())?;
        match self.rows.last() {
            Some(previous) => hard_mode::check(previous, guess),
            None => Ok(HardModeCheck::Valid),
        }
    }
}
