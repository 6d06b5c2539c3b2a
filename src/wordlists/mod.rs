//! Word lists and vocabulary
//!
//! Provides embedded word lists compiled into the binary, file loading for
//! custom lists, and a cache for asynchronous dictionary lookups.

mod cache;
mod embedded;
pub mod loader;
mod vocabulary;

pub use cache::{Lookup, LookupCache};
pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRA, EXTRA_COUNT};
pub use vocabulary::Vocabulary;
