//! Core domain types
//!
//! Letters and their bitmask encodings, words, feedback patterns, scored
//! rows and the engine's error type. Everything here is pure and allocation-light.

mod error;
pub mod letters;
mod pattern;
mod row;
mod word;

pub use error::{EngineError, ensure_length};
pub use letters::{
    ALPHABET_SIZE, LetterSet, decode_set, encode_positional, encode_set, letter_bit, letter_char,
};
pub use pattern::{Feedback, Pattern};
pub use row::Row;
pub use word::Word;
