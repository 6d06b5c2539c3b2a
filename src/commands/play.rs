//! Interactive game against a seeded secret
//!
//! Text-based loop: the player types guesses, the board is scored and
//! redrawn, and `hint <word>` names the remaining candidate that word would
//! do worst against.

use super::parse_guess;
use crate::core::{EngineError, Row, Word};
use crate::game::secret::{DEFAULT_START_MILLIS, DEFAULT_UNIT_MILLIS};
use crate::game::{
    Board, GameConfig, HardModeCheck, SeededSelector, Violation, pick_secret, word_number,
};
use crate::output::display::{print_board, print_game_over};
use crate::output::formatters::plural;
use crate::solver::Engine;
use crate::wordlists::{Lookup, LookupCache};
use colored::Colorize;
use std::io::{self, Write};
use thiserror::Error;

/// Why a typed guess was not played
#[derive(Debug, Error)]
pub enum Rejection {
    #[error(transparent)]
    Invalid(#[from] EngineError),

    #[error("{} is not in the word list", .0.to_uppercase())]
    UnknownWord(String),

    #[error("expected word:feedback, got {0:?}")]
    MalformedRow(String),

    #[error("{0}")]
    HardMode(Violation),

    #[error("the game is over")]
    GameOver,
}

/// One game: a board, its secret and the engine scoring it
pub struct PlaySession<'a> {
    engine: Engine<'a>,
    secret: &'a Word,
    board: Board,
    hints: LookupCache<Option<&'a Word>>,
}

impl<'a> PlaySession<'a> {
    #[must_use]
    pub fn new(engine: Engine<'a>, secret: &'a Word, config: GameConfig) -> Self {
        Self {
            engine,
            secret,
            board: Board::new(config),
            hints: LookupCache::new(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn secret(&self) -> &'a Word {
        self.secret
    }

    /// Solved or out of rows
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.board.is_solved() || self.board.is_full()
    }

    /// Score a typed guess and append it to the board
    ///
    /// # Errors
    /// Returns a [`Rejection`] for unknown or malformed words, hard-mode
    /// violations, and guesses after the game has ended.
    pub fn submit(&mut self, input: &str) -> Result<&Row, Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        let guess = parse_guess(self.engine.vocabulary(), input)?;
        if self.board.config().hard_mode
            && let HardModeCheck::Violation(violation) = self.board.check_next(&guess)?
        {
            return Err(Rejection::HardMode(violation));
        }
        // Hints depend on the board, so they are stale once a row lands
        self.hints = LookupCache::new();
        Ok(self.board.play(self.secret, guess)?)
    }

    /// Answers still consistent with the board
    ///
    /// # Errors
    /// Only fails if the board and vocabulary disagree on word length.
    pub fn remaining(&self) -> Result<usize, EngineError> {
        self.engine.count_candidates(&self.board)
    }

    /// The remaining candidate `input` would do worst against
    ///
    /// # Errors
    /// Returns a [`Rejection`] if `input` is not an acceptable guess.
    pub fn hint(&mut self, input: &str) -> Result<Option<&'a Word>, Rejection> {
        let guess = parse_guess(self.engine.vocabulary(), input)?;
        if let Some(Lookup::Resolved(hardest)) = self.hints.get(guess.text()) {
            return Ok(*hardest);
        }

        self.hints.begin(guess.text());
        match self.engine.recommend_hardest_secret(&self.board, &guess) {
            Ok(hardest) => {
                self.hints.resolve(guess.text(), hardest);
                Ok(hardest)
            }
            Err(e) => {
                self.hints.forget(guess.text());
                Err(e.into())
            }
        }
    }
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// answer list is empty.
pub fn run_play(engine: Engine<'_>, config: GameConfig, seed: u64) -> anyhow::Result<()> {
    let secret = pick_secret(&SeededSelector, seed, engine.vocabulary().answers())
        .ok_or_else(|| anyhow::anyhow!("the answer list is empty"))?;
    let title = if seed >= DEFAULT_START_MILLIS {
        format!("Game #{}", word_number(seed, DEFAULT_START_MILLIS, DEFAULT_UNIT_MILLIS))
    } else {
        format!("Seed {seed}")
    };
    log::info!("{title}, seed {seed}");

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Guess the hidden word                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "{title}: {} letters, {} guesses{}.",
        config.word_length,
        config.max_rows,
        if config.hard_mode { ", hard mode" } else { "" }
    );
    println!("Commands: 'hint <word>' for its hardest secret, 'board' to redraw, 'quit' to exit\n");

    let mut session = PlaySession::new(engine, secret, config);

    while !session.is_over() {
        let prompt = format!("Guess {}/{}", session.board().len() + 1, config.max_rows);
        let Some(input) = get_user_input(&prompt)? else {
            break;
        };

        let mut parts = input.split_whitespace();
        match (parts.next(), parts.next()) {
            (None, _) => {}
            (Some("quit" | "q" | "exit"), _) => break,
            (Some("board" | "b"), _) => print_board(session.board()),
            (Some("hint" | "h"), Some(word)) => match session.hint(word) {
                Ok(Some(hardest)) => println!(
                    "  Hardest secret for {}: {}\n",
                    word.to_uppercase(),
                    hardest.text().to_uppercase().bright_yellow().bold()
                ),
                Ok(None) => println!("  No candidates remain.\n"),
                Err(e) => println!("  {}\n", e.to_string().red()),
            },
            (Some("hint" | "h"), None) => println!("  Usage: hint <word>\n"),
            (Some(word), _) => match session.submit(word) {
                Ok(_) => {
                    print_board(session.board());
                    let remaining = session.remaining()?;
                    println!("  {remaining} candidate{} remaining\n", plural(remaining));
                }
                Err(e) => println!("  {}\n", e.to_string().red()),
            },
        }
    }

    print_game_over(session.board(), session.secret());
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
