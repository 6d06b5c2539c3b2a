//! Game-side collaborators of the engine
//!
//! The board of scored rows, its configuration, the hard-mode rule and
//! seeded secret selection.

mod board;
mod config;
pub mod hard_mode;
pub mod secret;

pub use board::Board;
pub use config::{DEFAULT_MAX_ROWS, DEFAULT_WORD_LENGTH, GameConfig};
pub use hard_mode::{HardModeCheck, Violation, ViolationKind};
pub use secret::{
    FixedSelector, SecretSelector, SeededSelector, pick_secret, session_seed, word_number,
};
