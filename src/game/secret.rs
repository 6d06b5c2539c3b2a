//! Seeded secret selection
//!
//! The engine never picks the hidden word itself. Callers choose a seed (the
//! game number, a timestamp bucket, a test constant) and hand it to a
//! [`SecretSelector`], so the same seed always yields the same secret.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of one game when seeding from the clock: a new game every second
pub const DEFAULT_UNIT_MILLIS: u64 = 1000;

/// Start of game number 1, 2022-01-17 14:10:00 UTC
pub const DEFAULT_START_MILLIS: u64 = 1_642_428_600_000;

/// Maps a seed to an index into a list of `len` answers
pub trait SecretSelector {
    /// Returns `None` when there is nothing to choose from
    fn select(&self, seed: u64, len: usize) -> Option<usize>;
}

/// Uniform choice driven by a seeded `StdRng`
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededSelector;

impl SecretSelector for SeededSelector {
    fn select(&self, seed: u64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        Some(rng.random_range(0..len))
    }
}

/// Always picks the same index, ignoring the seed
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl SecretSelector for FixedSelector {
    fn select(&self, _seed: u64, len: usize) -> Option<usize> {
        (self.0 < len).then_some(self.0)
    }
}

/// Pick a secret from `answers`
pub fn pick_secret<'a, S: SecretSelector + ?Sized>(
    selector: &S,
    seed: u64,
    answers: &'a [Word],
) -> Option<&'a Word> {
    selector
        .select(seed, answers.len())
        .and_then(|index| answers.get(index))
}

/// Round a timestamp down to the start of its `unit`-sized bucket
///
/// With `unit` = 1000 every second of wall-clock time is its own game.
#[must_use]
pub const fn session_seed(now_millis: u64, unit_millis: u64) -> u64 {
    if unit_millis == 0 {
        now_millis
    } else {
        now_millis - now_millis % unit_millis
    }
}

/// Sequential game number for `seed`, counting from the bucket that holds `start`
///
/// Halves round upward, so a seed exactly between two buckets belongs to the later one.
#[must_use]
pub fn word_number(seed: u64, start: u64, unit_millis: u64) -> i64 {
    let elapsed = seed as f64 - start as f64;
    let buckets = (elapsed / unit_millis.max(1) as f64 + 0.5).floor();
    buckets as i64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> Vec<Word> {
        ["crane", "slate", "robot", "train"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn seeded_selection_is_deterministic() {
        let selector = SeededSelector;
        for seed in [0, 1, 42, u64::MAX] {
            let first = selector.select(seed, 100);
            assert_eq!(first, selector.select(seed, 100));
            assert!(first.unwrap() < 100);
        }
    }

    #[test]
    fn empty_list_has_no_secret() {
        assert_eq!(SeededSelector.select(7, 0), None);
        assert!(pick_secret(&SeededSelector, 7, &[]).is_none());
    }

    #[test]
    fn fixed_selector_picks_index() {
        let words = answers();
        let secret = pick_secret(&FixedSelector(2), 12345, &words).unwrap();
        assert_eq!(secret.text(), "robot");
        assert!(pick_secret(&FixedSelector(9), 0, &words).is_none());
    }

    #[test]
    fn trait_objects_work() {
        let words = answers();
        let selector: Box<dyn SecretSelector> = Box::new(FixedSelector(0));
        assert_eq!(pick_secret(selector.as_ref(), 0, &words).unwrap().text(), "crane");
    }

    #[test]
    fn session_seed_truncates_to_unit() {
        assert_eq!(session_seed(1_642_428_600_999, 1000), 1_642_428_600_000);
        assert_eq!(session_seed(1234, 0), 1234);
    }

    #[test]
    fn word_number_counts_from_start() {
        let start = 1_642_428_600_000;
        assert_eq!(word_number(start, start, 1000), 1);
        assert_eq!(word_number(start + 5000, start, 1000), 6);
        assert_eq!(word_number(start + 5400, start, 1000), 6);
        assert_eq!(word_number(start + 5500, start, 1000), 7);
    }
}
