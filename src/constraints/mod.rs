//! Constraint accumulation and candidate filtering
//!
//! Board history is folded into a [`ConstraintState`] of letter bitmasks,
//! which then decides membership of the candidate set.

mod filter;
mod state;

pub use filter::{get_matches, is_match};
pub use state::ConstraintState;
