//! Wordle Constraints
//!
//! Constraint matching, hard-mode validation and worst-case guess scoring
//! for fixed-length word-guessing puzzles, built on 26-bit letter masks.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_constraints::core::Word;
//! use wordle_constraints::game::{Board, GameConfig};
//! use wordle_constraints::solver::Engine;
//! use wordle_constraints::wordlists::Vocabulary;
//!
//! let vocabulary = Vocabulary::embedded();
//! let engine = Engine::new(&vocabulary);
//!
//! let secret = Word::new("crane").unwrap();
//! let mut board = Board::new(GameConfig::default());
//! board.play(&secret, Word::new("slate").unwrap()).unwrap();
//!
//! let candidates = engine.filter_candidates(&board).unwrap();
//! assert!(candidates.iter().any(|w| w.text() == "crane"));
//! ```

// Letters, words and feedback
pub mod core;

// Aggregate constraint state and candidate filtering
pub mod constraints;

// Board, hard mode and secret selection
pub mod game;

// Candidate scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
