//! Game shape settings

/// Letters per word in the classic game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Guesses allowed in the classic game
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Configuration for a board and everything derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_rows: usize,
    /// Require every guess to reuse the previous row's hits and presents
    pub hard_mode: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_rows: usize) -> Self {
        Self {
            word_length,
            max_rows,
            hard_mode: false,
        }
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_rows, 6);
        assert!(!config.hard_mode);
    }

    #[test]
    fn hard_mode_builder() {
        let config = GameConfig::new(6, 8).with_hard_mode(true);
        assert_eq!(config.word_length, 6);
        assert_eq!(config.max_rows, 8);
        assert!(config.hard_mode);
    }
}
