//! Candidate filtering and guess scoring over a vocabulary
//!
//! [`Engine`] is the entry point used by the game and the CLI; the
//! recommender functions work on an explicit constraint state and
//! candidate slice.

mod engine;
mod recommender;

pub use engine::Engine;
pub use recommender::{hardest_secret, pick_hardest, remaining_after, score_secrets};
